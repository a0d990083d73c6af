// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the conversational pipeline.
//!
//! Each test wires a real engine (Ollama client against a wiremock server,
//! built-in capability registry, temp-file memory store) and drives whole
//! turns through it. Audio stays out: the engine returns the text a loop
//! would speak.

use std::sync::Arc;

use nova_agent::ConversationEngine;
use nova_config::model::ModelConfig;
use nova_memory::MemoryStore;
use nova_ollama::OllamaClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct TestHarness {
    _dir: tempfile::TempDir,
    memory_path: std::path::PathBuf,
    engine: ConversationEngine,
}

async fn harness(server: &MockServer) -> TestHarness {
    let dir = tempfile::tempdir().unwrap();
    let memory_path = dir.path().join("memory.json");
    let backend = OllamaClient::new(&ModelConfig {
        name: "mistral".into(),
        endpoint: format!("{}/api/generate", server.uri()),
        request_timeout_secs: 5,
    })
    .unwrap();

    let engine = ConversationEngine::new(
        "nova",
        Arc::new(backend),
        Arc::new(nova_skill::builtin_registry()),
        MemoryStore::open(&memory_path),
    );

    TestHarness {
        _dir: dir,
        memory_path,
        engine,
    }
}

/// Mounts a mock that answers `/api/generate` with the given completion.
async fn mock_completion(server: &MockServer, completion: &str) {
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model": "mistral",
            "response": completion,
            "done": true
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn text_turn_returns_the_model_reply() {
    let server = MockServer::start().await;
    mock_completion(&server, r#"{"type": "text", "response": "Hello from Nova!"}"#).await;

    let harness = harness(&server).await;
    let reply = harness.engine.submit("hi there").await;
    assert_eq!(reply, "Hello from Nova!");
}

#[tokio::test]
async fn function_turn_dispatches_a_builtin() {
    let server = MockServer::start().await;
    mock_completion(
        &server,
        r#"{"type": "function", "function": "get_date", "args": {}}"#,
    )
    .await;

    let harness = harness(&server).await;
    let reply = harness.engine.submit("what day is it?").await;
    assert!(reply.starts_with("Today is "), "got: {reply}");
}

#[tokio::test]
async fn memory_turn_persists_across_store_reload() {
    let server = MockServer::start().await;
    mock_completion(
        &server,
        r#"{"type": "memory", "key": "favorite_color", "value": "blue"}"#,
    )
    .await;

    let harness = harness(&server).await;
    let reply = harness.engine.submit("my favorite color is blue").await;
    assert!(reply.contains("favorite_color") && reply.contains("blue"));

    // Simulates a process restart.
    let mut reopened = MemoryStore::open(&harness.memory_path);
    assert_eq!(reopened.recall("favorite_color").as_deref(), Some("blue"));
}

#[tokio::test]
async fn backend_failure_is_reported_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let harness = harness(&server).await;
    let reply = harness.engine.submit("hi").await;
    assert!(reply.starts_with("Error talking to the language model"), "got: {reply}");
}

#[tokio::test]
async fn prose_wrapped_reply_still_round_trips() {
    let server = MockServer::start().await;
    mock_completion(
        &server,
        r#"Sure thing! {"type": "text", "response": "wrapped"} Anything else?"#,
    )
    .await;

    let harness = harness(&server).await;
    assert_eq!(harness.engine.submit("hi").await, "wrapped");
}
