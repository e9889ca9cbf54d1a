//! Sentence splitting and coarse text statistics.

use serde::{Deserialize, Serialize};

use crate::types::{AnalysisSummary, Complexity};

/// Segments shorter than this are treated as noise.
pub const MIN_SENTENCE_LEN: usize = 20;

/// Sentences and statistics extracted from raw input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentences: Vec<String>,
    pub word_count: usize,
    pub complexity: Complexity,
}

impl AnalysisResult {
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            word_count: self.word_count,
            sentence_count: self.sentences.len(),
            complexity: self.complexity,
        }
    }
}

/// Splits text into candidate sentences.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    min_sentence_len: usize,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self {
            min_sentence_len: MIN_SENTENCE_LEN,
        }
    }
}

impl TextAnalyzer {
    pub fn new(min_sentence_len: usize) -> Self {
        Self { min_sentence_len }
    }

    /// Analyze raw text. Never fails; empty input yields an empty result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            return AnalysisResult {
                sentences: vec![],
                word_count: 0,
                complexity: Complexity::Easy,
            };
        }

        // Runs of terminators produce empty segments, which the length filter drops.
        let sentences = text
            .split(is_terminator)
            .map(str::trim)
            .filter(|s| s.chars().count() >= self.min_sentence_len)
            .map(str::to_string)
            .collect();

        let word_count = text.split_whitespace().count();

        AnalysisResult {
            sentences,
            word_count,
            complexity: complexity_for(word_count),
        }
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn complexity_for(word_count: usize) -> Complexity {
    if word_count > 200 {
        Complexity::High
    } else if word_count > 100 {
        Complexity::Medium
    } else {
        Complexity::Easy
    }
}
