//! API request and response types

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

// Re-export shared types from notical-core
pub use notical_core::types::{
    AnalysisSummary, Card, DedupPolicy, DifficultyStrategy, Generation, GenerationRequest, Level,
    Mode, Style,
};
pub use notical_core::{AnalysisResult, KnowledgeEntry};

fn default_num_cards() -> i64 {
    5
}

/// Request for POST /api/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_num_cards")]
    pub num_cards: i64,
    #[serde(default)]
    pub generation_mode: Mode,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub exam_board: Option<String>,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub difficulty_strategy: DifficultyStrategy,
    #[serde(default)]
    pub dedup: DedupPolicy,
    #[serde(default)]
    pub include_cloze: bool,
}

impl GenerateRequest {
    /// Convert to a core request, enforcing the server's card limit.
    ///
    /// Empty content and non-positive counts are left for the core to reject.
    pub fn into_core(self, max_cards: usize) -> Result<GenerationRequest> {
        let num_cards = usize::try_from(self.num_cards).unwrap_or(0);
        if num_cards > max_cards {
            return Err(ApiError::BadRequest(format!(
                "num_cards must be at most {}",
                max_cards
            )));
        }

        Ok(GenerationRequest::new(self.content, num_cards)
            .with_mode(self.generation_mode)
            .with_style(self.style, self.exam_board)
            .with_difficulty(self.difficulty_strategy, self.level)
            .with_dedup(self.dedup)
            .with_cloze(self.include_cloze))
    }
}

/// Response for POST /api/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub flashcards: Vec<Card>,
    pub message: String,
    pub analysis: AnalysisSummary,
}

impl From<Generation> for GenerateResponse {
    fn from(generation: Generation) -> Self {
        Self {
            flashcards: generation.cards,
            message: generation.message,
            analysis: generation.analysis,
        }
    }
}

/// Request for POST /api/analyze
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub content: String,
}

/// Response for GET /api/knowledge/:term
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeResponse {
    pub term: String,
    #[serde(flatten)]
    pub entry: KnowledgeEntry,
}
