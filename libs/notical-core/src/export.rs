//! Render generated cards as a markdown deck.
//!
//! # Format
//! ```markdown
//! Q: What is Osmosis?
//! A: Osmosis is the movement of water across a membrane
//!
//! Q: How does Glycolysis work?
//! A: Glycolysis relies on enzymes in the cytoplasm
//! ```

use crate::types::Card;

/// Render cards as `Q:`/`A:` blocks separated by blank lines.
pub fn to_markdown(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| format!("Q: {}\nA: {}\n", single_line(&card.question), card.answer.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Questions must stay on the `Q:` line.
fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
