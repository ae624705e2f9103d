//! End-to-end tests for the JSON-RPC endpoint
//!
//! The router is driven in-process with scripted backends and deterministic ids.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use a2a_code_helper::{
    backend::{BackendFactory, GenerationBackend},
    protocol::{error::BackendError, AgentCard},
    server::{router, AppState},
    service::{A2AAgentService, IdGenerator},
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use url::Url;

/// Backend that echoes a fixed answer and counts its calls
struct ScriptedBackend {
    answer: String,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate(&self, _text: &str) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }
}

struct Harness {
    app: Router,
    calls: Arc<AtomicUsize>,
}

fn card() -> AgentCard {
    AgentCard::code_helper(&Url::parse("https://agent.example.com").unwrap())
}

fn sequential_ids() -> Arc<dyn IdGenerator> {
    let counter = AtomicUsize::new(0);
    Arc::new(move || format!("gen-{}", counter.fetch_add(1, Ordering::SeqCst)))
}

fn harness(answer: &str) -> Harness {
    let calls = Arc::new(AtomicUsize::new(0));
    let backend: Arc<dyn GenerationBackend> = Arc::new(ScriptedBackend {
        answer: answer.to_string(),
        calls: calls.clone(),
    });
    let factory: Arc<dyn BackendFactory> =
        Arc::new(move || -> Result<Arc<dyn GenerationBackend>, BackendError> {
            Ok(backend.clone())
        });

    let service = A2AAgentService::new(factory).with_id_generator(sequential_ids());
    Harness {
        app: router(AppState::new(service, card())),
        calls,
    }
}

async fn post(app: &Router, path: &str, body: impl Into<Body>) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::post(path)
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, document: Value) -> Value {
    post(app, "/api/", document.to_string()).await
}

fn send_message(id: Value, parts: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "message/send",
        "params": {"message": {"messageId": "m1", "parts": parts}}
    })
}

#[tokio::test]
async fn test_message_send_completes_task() {
    let h = harness("world");
    let response = send(
        &h.app,
        send_message(json!(7), json!([{"type": "text", "text": "hello"}])),
    )
    .await;

    assert_eq!(
        response,
        json!({
            "jsonrpc": "2.0",
            "id": 7,
            "result": {
                "id": "gen-1",
                "contextId": "m1",
                "status": {
                    "state": "completed",
                    "message": {
                        "role": "agent",
                        "parts": [{"type": "text", "text": "world"}],
                        "kind": "message",
                        "messageId": "gen-0"
                    }
                },
                "artifacts": [
                    {"name": "agent_response", "parts": [{"type": "text", "text": "world"}]},
                    {"name": "original_query", "parts": [{"type": "text", "text": "hello"}]}
                ],
                "history": [
                    {
                        "id": 7,
                        "role": "user",
                        "parts": [{"type": "text", "text": "hello"}],
                        "kind": "message",
                        "messageId": "m1"
                    },
                    {
                        "id": "gen-1",
                        "role": "agent",
                        "parts": [{"type": "text", "text": "world"}],
                        "kind": "message",
                        "messageId": "gen-0"
                    }
                ]
            }
        })
    );
    assert_eq!(h.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_task_ids_are_consistent() {
    let h = harness("world");
    let response = send(
        &h.app,
        send_message(json!("abc"), json!([{"kind": "text", "text": "  hi  "}])),
    )
    .await;
    let result = &response["result"];

    assert_eq!(response["id"], "abc");
    assert_eq!(result["history"][0]["id"], response["id"]);
    assert_eq!(result["history"][0]["messageId"], result["contextId"]);
    assert_eq!(result["history"][1]["id"], result["id"]);
    assert_eq!(
        result["history"][1]["messageId"],
        result["status"]["message"]["messageId"]
    );
    assert_eq!(result["artifacts"][1]["parts"][0]["text"], "hi");
}

#[tokio::test]
async fn test_unsupported_version() {
    let h = harness("world");
    let mut document = send_message(json!(1), json!([{"type": "text", "text": "hello"}]));
    document["jsonrpc"] = json!("1.0");

    let response = send(&h.app, document).await;

    assert_eq!(
        response,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {
                "code": -32600,
                "message": "Invalid Request: Unsupported JSON-RPC version '1.0'"
            }
        })
    );
    assert_eq!(h.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_empty_parts() {
    let h = harness("world");
    let response = send(&h.app, send_message(json!(2), json!([]))).await;

    assert_eq!(response["id"], 2);
    assert_eq!(response["error"]["code"], -32600);
    assert_eq!(
        response["error"]["message"],
        "Invalid Request: 'params.message.parts' is missing or empty"
    );
    assert!(response.get("result").is_none());
}

#[tokio::test]
async fn test_blank_text() {
    let h = harness("world");
    let response = send(
        &h.app,
        send_message(json!(3), json!([{"type": "text", "text": " \n\t "}])),
    )
    .await;

    assert_eq!(response["error"]["code"], -32600);
    assert_eq!(response["error"]["message"], "Invalid Request: User text is empty");
    assert_eq!(h.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_non_text_part() {
    let h = harness("world");
    let response = send(
        &h.app,
        send_message(json!(4), json!([{"type": "file", "text": "x"}])),
    )
    .await;

    assert_eq!(
        response["error"]["message"],
        "Invalid Request: First message part type must be 'text', got 'file'"
    );
}

#[tokio::test]
async fn test_unknown_method() {
    let h = harness("world");
    let mut document = send_message(json!(5), json!([{"type": "text", "text": "hello"}]));
    document["method"] = json!("message/listen");

    let response = send(&h.app, document).await;

    assert_eq!(response["id"], 5);
    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["error"]["message"], "Method not found: message/listen");
    assert_eq!(h.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unparseable_body() {
    let h = harness("world");
    let response = post(&h.app, "/api/work", "{\"jsonrpc\": \"2.0\", \"id\": 9,").await;

    assert_eq!(response["jsonrpc"], "2.0");
    assert!(response["id"].is_null());
    assert_eq!(response["error"]["code"], -32700);
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Parse error: "));
}

#[tokio::test]
async fn test_large_body_is_answered_in_band() {
    let h = harness("world");
    let question = "x".repeat(3 * 1024 * 1024);

    let response = send(
        &h.app,
        send_message(json!(10), json!([{"type": "text", "text": question}])),
    )
    .await;

    assert_eq!(response["id"], 10);
    assert_eq!(response["result"]["status"]["state"], "completed");
    assert_eq!(
        response["result"]["artifacts"][1]["parts"][0]["text"]
            .as_str()
            .map(str::len),
        Some(3 * 1024 * 1024)
    );
    assert_eq!(h.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unconfigured_backend() {
    let factory: Arc<dyn BackendFactory> =
        Arc::new(|| -> Result<Arc<dyn GenerationBackend>, BackendError> {
            Err(BackendError::Unconfigured("GEMINI_API_KEY is not set".into()))
        });
    let app = router(AppState::new(A2AAgentService::new(factory), card()));

    let response = send(
        &app,
        send_message(json!(6), json!([{"type": "text", "text": "hello"}])),
    )
    .await;

    assert_eq!(
        response["error"],
        json!({"code": -32000, "message": "Server error: AI agent could not be initialized"})
    );
}

#[tokio::test]
async fn test_unreachable_backend_hides_detail() {
    let factory: Arc<dyn BackendFactory> = Arc::new(
        a2a_code_helper::backend::GeminiConfig::new(Some("key".into()))
            .with_api_base("http://127.0.0.1:1"),
    );
    let app = router(AppState::new(A2AAgentService::new(factory), card()));

    let response = send(
        &app,
        send_message(json!(8), json!([{"type": "text", "text": "hello"}])),
    )
    .await;

    assert_eq!(
        response["error"],
        json!({"code": -32603, "message": "AI agent is unreachable at the moment"})
    );
}

#[tokio::test]
async fn test_agent_card() {
    let h = harness("world");
    let response = h
        .app
        .clone()
        .oneshot(
            Request::get("/.well-known/agent.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let card: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(card["name"], "CodeHelperAgent");
    assert_eq!(card["url"], "https://agent.example.com/api/");
    assert_eq!(
        card["capabilities"],
        json!({"streaming": false, "pushNotifications": false, "stateTransitionHistory": false})
    );
}
