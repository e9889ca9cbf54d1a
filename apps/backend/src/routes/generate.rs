//! Flashcard generation endpoints

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{GenerateRequest, GenerateResponse, Generation};
use crate::AppState;

/// POST /api/generate
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let generation = run_generation(&state, payload).await?;
    Ok(Json(GenerateResponse::from(generation)))
}

/// POST /api/generate/markdown
/// Same as generate, rendered as a Q:/A: markdown deck
pub async fn markdown(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<impl IntoResponse> {
    let generation = run_generation(&state, payload).await?;
    let deck = notical_core::to_markdown(&generation.cards);

    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        deck,
    ))
}

async fn run_generation(state: &AppState, payload: GenerateRequest) -> Result<Generation> {
    let request = payload.into_core(state.config.max_cards)?;
    let mode = request.mode;
    let generator = state.generator.clone();

    // CPU-bound; keep it off the async workers.
    let generation = tokio::task::spawn_blocking(move || generator.generate(&request))
        .await
        .map_err(|e| ApiError::Internal(format!("generation task failed: {}", e)))??;

    tracing::info!(
        "Generated {} of {} cards ({})",
        generation.cards.len(),
        generation.requested,
        mode.as_str()
    );

    Ok(generation)
}
