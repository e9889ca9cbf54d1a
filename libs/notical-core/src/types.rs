//! Core types for flashcard generation.

use serde::{Deserialize, Serialize};

/// Top-level generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    SmartUnderstanding,
    StrictText,
    OnlineResearch,
}

impl Default for Mode {
    fn default() -> Self {
        Self::SmartUnderstanding
    }
}

impl Mode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmartUnderstanding => "smart_understanding",
            Self::StrictText => "strict_text",
            Self::OnlineResearch => "online_research",
        }
    }
}

/// Tone applied to generated answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Simple,
    Professional,
    ExamFocused,
}

impl Default for Style {
    fn default() -> Self {
        Self::Simple
    }
}

/// Study level used by the tiered difficulty strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    HighSchool,
    University,
    Postgraduate,
}

impl Default for Level {
    fn default() -> Self {
        Self::University
    }
}

/// How card difficulty is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyStrategy {
    /// Fixed label per card type.
    Fixed,
    /// Integer tier from term length relative to the study level.
    LevelTiered,
}

impl Default for DifficultyStrategy {
    fn default() -> Self {
        Self::Fixed
    }
}

/// How answers are compared when removing duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// Byte-for-byte equality.
    Exact,
    /// Equality after collapsing whitespace and lowercasing.
    Normalized,
}

impl Default for DedupPolicy {
    fn default() -> Self {
        Self::Exact
    }
}

/// Category of an extracted concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptKind {
    Definition,
    Comparison,
    Process,
    General,
    KeyTerm,
}

/// Candidate subject found in the text, with the sentence it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub term: String,
    pub kind: ConceptKind,
    pub context: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_terms: Vec<String>,
    pub sentence_index: usize,
}

/// Card type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Definition,
    Comparison,
    Process,
    Concept,
    Cloze,
    Explanation,
}

impl From<ConceptKind> for CardKind {
    fn from(kind: ConceptKind) -> Self {
        match kind {
            ConceptKind::Definition => Self::Definition,
            ConceptKind::Comparison => Self::Comparison,
            ConceptKind::Process => Self::Process,
            ConceptKind::General => Self::Concept,
            ConceptKind::KeyTerm => Self::Concept,
        }
    }
}

/// Difficulty label used by the fixed strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLabel {
    Easy,
    Medium,
    Hard,
}

/// Card difficulty: a label or an integer tier (1-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Difficulty {
    Label(DifficultyLabel),
    Tier(u8),
}

/// Where a card came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSource {
    SmartUnderstanding,
    StrictText,
    OnlineResearch,
    KnowledgeBase,
}

impl From<Mode> for CardSource {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::SmartUnderstanding => Self::SmartUnderstanding,
            Mode::StrictText => Self::StrictText,
            Mode::OnlineResearch => Self::OnlineResearch,
        }
    }
}

/// Generated question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(alias = "front")]
    pub question: String,
    #[serde(alias = "back")]
    pub answer: String,
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub term: String,
    pub difficulty: Difficulty,
    pub style: Style,
    pub source: CardSource,
    pub ai_enhanced: bool,
}

/// Parameters of one generation call.
///
/// Wire defaults live with the HTTP request type; this is built in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub content: String,
    pub num_cards: usize,
    pub mode: Mode,
    pub style: Style,
    pub exam_board: Option<String>,
    pub level: Level,
    pub difficulty_strategy: DifficultyStrategy,
    pub dedup: DedupPolicy,
    pub include_cloze: bool,
}

impl GenerationRequest {
    /// Create a request with default mode, style and policies.
    pub fn new(content: impl Into<String>, num_cards: usize) -> Self {
        Self {
            content: content.into(),
            num_cards,
            mode: Mode::default(),
            style: Style::default(),
            exam_board: None,
            level: Level::default(),
            difficulty_strategy: DifficultyStrategy::default(),
            dedup: DedupPolicy::default(),
            include_cloze: false,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_style(mut self, style: Style, exam_board: Option<String>) -> Self {
        self.style = style;
        self.exam_board = exam_board;
        self
    }

    pub fn with_difficulty(mut self, strategy: DifficultyStrategy, level: Level) -> Self {
        self.difficulty_strategy = strategy;
        self.level = level;
        self
    }

    pub fn with_dedup(mut self, dedup: DedupPolicy) -> Self {
        self.dedup = dedup;
        self
    }

    pub fn with_cloze(mut self, include_cloze: bool) -> Self {
        self.include_cloze = include_cloze;
        self
    }
}

/// Coarse text complexity derived from word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Easy,
    Medium,
    High,
}

impl Default for Complexity {
    fn default() -> Self {
        Self::Easy
    }
}

/// Analysis figures reported alongside generated cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub word_count: usize,
    pub sentence_count: usize,
    pub complexity: Complexity,
}

/// Output of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub cards: Vec<Card>,
    pub message: String,
    pub requested: usize,
    pub analysis: AnalysisSummary,
}
