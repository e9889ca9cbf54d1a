//! Answer-level deduplication and truncation.

use std::collections::HashSet;

use crate::types::{Card, DedupPolicy};

/// Drop cards whose answer was already used, then keep at most
/// `target_count`. Answers are compared byte for byte.
pub fn finalize(cards: Vec<Card>, target_count: usize) -> Vec<Card> {
    finalize_with(cards, target_count, DedupPolicy::Exact)
}

/// Like [`finalize`] with a configurable answer comparison.
pub fn finalize_with(cards: Vec<Card>, target_count: usize, policy: DedupPolicy) -> Vec<Card> {
    let mut seen = HashSet::new();

    cards
        .into_iter()
        .filter(|card| seen.insert(answer_key(&card.answer, policy)))
        .take(target_count)
        .collect()
}

fn answer_key(answer: &str, policy: DedupPolicy) -> String {
    match policy {
        DedupPolicy::Exact => answer.to_string(),
        DedupPolicy::Normalized => answer
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase(),
    }
}
