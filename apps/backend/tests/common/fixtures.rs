//! Test fixtures and factory functions for creating request bodies.

use serde_json::json;

/// Two sentences: a definition and a contrast with it.
pub const PHOTOSYNTHESIS: &str = "Photosynthesis is the process plants use to convert light into energy. Respiration, however, releases that energy.";

/// One long sentence that matches no keyword pattern.
pub const EINSTEIN: &str =
    "Albert Einstein published his theory of relativity in the early twentieth century.";

/// Generate study text yielding one definition per sentence.
///
/// # Arguments
/// * `num_sentences` - Number of definition sentences (at most 8)
pub fn definition_text(num_sentences: usize) -> String {
    const TERMS: &[&str] = &[
        "Osmosis",
        "Diffusion",
        "Catalysis",
        "Entropy",
        "Momentum",
        "Velocity",
        "Inertia",
        "Friction",
    ];

    TERMS
        .iter()
        .take(num_sentences)
        .enumerate()
        .map(|(i, term)| format!("{} is the subject of chapter number {} in this book.", term, i + 1))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a generate request body with defaults for everything else.
pub fn generate_request(content: &str, num_cards: i64) -> serde_json::Value {
    json!({ "content": content, "num_cards": num_cards })
}

/// Create a generate request body with an explicit mode.
pub fn generate_request_with_mode(content: &str, num_cards: i64, mode: &str) -> serde_json::Value {
    json!({
        "content": content,
        "num_cards": num_cards,
        "generation_mode": mode
    })
}

/// Create an analyze request body.
pub fn analyze_request(content: &str) -> serde_json::Value {
    json!({ "content": content })
}
