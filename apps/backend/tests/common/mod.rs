//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the app with a chosen knowledge base and config
//! - Helper functions for creating request bodies

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use notical_backend::config::Config;
use notical_backend::{router, AppState};
use notical_core::{Generator, KnowledgeBase};

/// Test context holding a fully wired router.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context with the builtin knowledge base and default config.
    pub fn new() -> Self {
        let knowledge = KnowledgeBase::builtin().expect("builtin knowledge base must parse");
        Self::with(knowledge, Config::default())
    }

    /// Create a context with an explicit knowledge base and config.
    pub fn with(knowledge: KnowledgeBase, config: Config) -> Self {
        let state = AppState::new(Generator::new(Arc::new(knowledge)), config);
        Self {
            app: router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
