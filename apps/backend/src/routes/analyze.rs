//! Text analysis endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{AnalysisResult, AnalyzeRequest};
use crate::AppState;

/// POST /api/analyze
/// Returns the sentences and statistics the generator would work from
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>> {
    let analysis = state.generator.analyze(&payload.content);
    Ok(Json(analysis))
}
