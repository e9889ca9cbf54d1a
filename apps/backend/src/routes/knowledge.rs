//! Knowledge base lookup endpoint

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::KnowledgeResponse;
use crate::AppState;

/// GET /api/knowledge/:term
pub async fn lookup(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<KnowledgeResponse>> {
    let entry = state
        .generator
        .knowledge()
        .get(&term)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Unknown term: {}", term)))?;

    Ok(Json(KnowledgeResponse { term, entry }))
}
