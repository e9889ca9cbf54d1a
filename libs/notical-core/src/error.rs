//! Error types for notical-core.

use thiserror::Error;

/// Result type alias using GenerationError.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Errors that can occur when a generation request is rejected.
///
/// Producing fewer cards than requested is not an error; callers always get
/// a (possibly shorter) list back.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors that can occur while loading a knowledge base.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("failed to read knowledge base: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed knowledge base: {0}")]
    Json(#[from] serde_json::Error),
}
