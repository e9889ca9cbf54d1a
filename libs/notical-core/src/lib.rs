//! Core flashcard generation library.
//!
//! Provides:
//! - Text analysis (sentence splitting, complexity)
//! - Heuristic concept extraction (definitions, comparisons, processes)
//! - Card building with style and difficulty strategies
//! - Answer deduplication
//! - Markdown deck export

pub mod analyzer;
pub mod dedup;
pub mod error;
pub mod export;
pub mod extractor;
pub mod factory;
pub mod generator;
pub mod knowledge;
pub mod types;

pub use analyzer::{AnalysisResult, TextAnalyzer};
pub use dedup::{finalize, finalize_with};
pub use error::{GenerationError, KnowledgeError, Result};
pub use export::to_markdown;
pub use extractor::ConceptExtractor;
pub use factory::CardFactory;
pub use generator::Generator;
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use types::{
    AnalysisSummary, Card, CardKind, CardSource, Complexity, Concept, ConceptKind, DedupPolicy,
    Difficulty, DifficultyLabel, DifficultyStrategy, Generation, GenerationRequest, Level, Mode,
    Style,
};
