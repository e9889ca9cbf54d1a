//! Generation API tests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use common::fixtures;
use common::TestContext;
use notical_backend::config::Config;
use notical_core::KnowledgeBase;

fn server() -> TestServer {
    TestServer::new(TestContext::new().router()).unwrap()
}

/// Test the definition/comparison scenario end to end.
#[tokio::test]
async fn test_generate_definition_and_comparison() {
    let server = server();

    let response = server
        .post("/api/generate")
        .json(&fixtures::generate_request(fixtures::PHOTOSYNTHESIS, 5))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cards = body["flashcards"].as_array().unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["type"], "definition");
    assert_eq!(cards[0]["term"], "Photosynthesis");
    assert_eq!(cards[0]["question"], "What is Photosynthesis?");
    assert_eq!(cards[0]["difficulty"], "medium");
    assert_eq!(cards[0]["source"], "smart_understanding");
    assert_eq!(cards[1]["type"], "comparison");
    assert_eq!(cards[1]["answer"], "Respiration, however, releases that energy");
    assert_eq!(body["message"], "Generated 2 of 5 requested flashcards");
    assert_eq!(body["analysis"]["sentence_count"], 2);
}

/// Test empty content is rejected with a JSON error.
#[tokio::test]
async fn test_generate_empty_content() {
    let server = server();

    let response = server
        .post("/api/generate")
        .json(&fixtures::generate_request("   ", 5))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "invalid_input");
}

/// Test missing content field behaves like empty content.
#[tokio::test]
async fn test_generate_missing_content() {
    let server = server();

    let response = server.post("/api/generate").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// Test num_cards below one is rejected.
#[tokio::test]
async fn test_generate_zero_cards() {
    let server = server();

    let response = server
        .post("/api/generate")
        .json(&fixtures::generate_request(fixtures::PHOTOSYNTHESIS, 0))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// Test request bodies above the configured size are refused.
#[tokio::test]
async fn test_generate_body_too_large() {
    let config = Config {
        max_body_bytes: 64,
        ..Config::default()
    };
    let ctx = TestContext::with(KnowledgeBase::empty(), config);
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/generate")
        .json(&fixtures::generate_request(&fixtures::definition_text(4), 2))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

/// Test num_cards above the configured maximum is rejected.
#[tokio::test]
async fn test_generate_over_limit() {
    let config = Config {
        max_cards: 3,
        ..Config::default()
    };
    let ctx = TestContext::with(KnowledgeBase::empty(), config);
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/generate")
        .json(&fixtures::generate_request(fixtures::PHOTOSYNTHESIS, 4))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

/// Test num_cards defaults to five.
#[tokio::test]
async fn test_generate_default_count() {
    let server = server();

    let response = server
        .post("/api/generate")
        .json(&json!({ "content": fixtures::definition_text(8) }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["flashcards"].as_array().unwrap().len(), 5);
    assert_eq!(body["message"], "Generated 5 flashcards");
}

/// Test output is capped and keeps the earliest definitions.
#[tokio::test]
async fn test_generate_cap() {
    let server = server();

    let response = server
        .post("/api/generate")
        .json(&fixtures::generate_request(&fixtures::definition_text(6), 2))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cards = body["flashcards"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["term"], "Osmosis");
    assert_eq!(cards[1]["term"], "Diffusion");
}

/// Test the general fallback for a sentence with no keyword.
#[tokio::test]
async fn test_generate_general_fallback() {
    let server = server();

    let response = server
        .post("/api/generate")
        .json(&fixtures::generate_request(fixtures::EINSTEIN, 5))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cards = body["flashcards"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(
        cards[0]["question"],
        "Explain the concept of Albert Einstein based on the context"
    );
}

/// Test strict_text mode maps key terms to sentences.
#[tokio::test]
async fn test_generate_strict_text() {
    let server = server();

    let response = server
        .post("/api/generate")
        .json(&fixtures::generate_request_with_mode(
            "Rust is a language built for safety. Cargo manages dependencies for projects.",
            5,
            "strict_text",
        ))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cards = body["flashcards"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|c| c["source"] == "strict_text"));
}

/// Test online_research adds knowledge base explanations.
#[tokio::test]
async fn test_generate_online_research() {
    let server = server();

    let response = server
        .post("/api/generate")
        .json(&fixtures::generate_request_with_mode(
            fixtures::PHOTOSYNTHESIS,
            10,
            "online_research",
        ))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cards = body["flashcards"].as_array().unwrap();
    let explanations: Vec<_> = cards
        .iter()
        .filter(|c| c["type"] == "explanation")
        .collect();
    assert_eq!(explanations.len(), 2);
    assert!(explanations.iter().all(|c| c["source"] == "knowledge_base"));
    assert!(explanations.iter().all(|c| c["ai_enhanced"] == true));
}

/// Test unknown generation modes are rejected by deserialization.
#[tokio::test]
async fn test_generate_unknown_mode() {
    let server = server();

    let response = server
        .post("/api/generate")
        .json(&fixtures::generate_request_with_mode(
            fixtures::PHOTOSYNTHESIS,
            5,
            "telepathy",
        ))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

/// Test tiered difficulty and exam style options.
#[tokio::test]
async fn test_generate_style_and_difficulty() {
    let server = server();

    let response = server
        .post("/api/generate")
        .json(&json!({
            "content": fixtures::PHOTOSYNTHESIS,
            "num_cards": 5,
            "style": "exam_focused",
            "exam_board": "Edexcel",
            "level": "postgraduate",
            "difficulty_strategy": "level_tiered"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let definition = &body["flashcards"][0];
    assert!(definition["answer"]
        .as_str()
        .unwrap()
        .starts_with("For Edexcel: "));
    assert_eq!(definition["difficulty"], 4);
    assert_eq!(definition["style"], "exam_focused");
}

/// Test repeated calls return identical output.
#[tokio::test]
async fn test_generate_is_deterministic() {
    let server = server();
    let request = fixtures::generate_request(&fixtures::definition_text(8), 6);

    let first = server.post("/api/generate").json(&request).await;
    let second = server.post("/api/generate").json(&request).await;

    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(first.text(), second.text());
}

/// Test the markdown deck export.
#[tokio::test]
async fn test_generate_markdown() {
    let server = server();

    let response = server
        .post("/api/generate/markdown")
        .json(&fixtures::generate_request(fixtures::PHOTOSYNTHESIS, 5))
        .await;

    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/markdown"));

    let deck = response.text();
    assert!(deck.starts_with("Q: What is Photosynthesis?\nA: Photosynthesis is the process"));
    assert!(deck.contains("\n\nQ: How do Respiration and Photosynthesis differ?\n"));
}

/// Test markdown export validates like the JSON endpoint.
#[tokio::test]
async fn test_generate_markdown_empty_content() {
    let server = server();

    let response = server
        .post("/api/generate/markdown")
        .json(&fixtures::generate_request("", 5))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
