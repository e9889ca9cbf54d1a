pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use notical_core::{Generator, KnowledgeBase};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<Generator>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(generator: Generator, config: Config) -> Self {
        Self {
            generator: Arc::new(generator),
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health_check))
        .route("/api/generate", post(routes::generate::generate))
        .route("/api/generate/markdown", post(routes::generate::markdown))
        .route("/api/analyze", post(routes::analyze::analyze))
        .route("/api/knowledge/:term", get(routes::knowledge::lookup))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

/// Load the knowledge base named by the config, or the builtin one.
pub fn load_knowledge(config: &Config) -> anyhow::Result<KnowledgeBase> {
    let knowledge = match &config.knowledge_base_path {
        Some(path) => {
            tracing::info!("Loading knowledge base from {}", path.display());
            KnowledgeBase::from_path(path)?
        }
        None => KnowledgeBase::builtin()?,
    };

    tracing::info!("Knowledge base ready with {} entries", knowledge.len());
    Ok(knowledge)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let knowledge = load_knowledge(&config)?;

    let addr = config.bind_address();
    let state = AppState::new(Generator::new(Arc::new(knowledge)), config);
    let app = router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
