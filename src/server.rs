//! HTTP binding for the agent
//!
//! Serves the JSON-RPC endpoint and the agent card. Every JSON-RPC outcome,
//! including errors, is returned with HTTP 200 and an `application/json` body.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde_json::Value;
use tokio::net::TcpListener;
use tower::{ServiceBuilder, ServiceExt};
use tracing::{error, info};

use crate::{
    codec::JsonRpcCodec,
    layer::{validation::request_id, A2AValidationLayer},
    protocol::{error::A2AError, AgentCard},
    service::{A2AAgentService, A2AResponse},
};

/// Shared state for the HTTP handlers
#[derive(Clone, Debug)]
pub struct AppState {
    service: A2AAgentService,
    card: Arc<AgentCard>,
    codec: JsonRpcCodec,
}

impl AppState {
    /// Create handler state from an agent service and its card
    pub fn new(service: A2AAgentService, card: AgentCard) -> Self {
        Self {
            service,
            card: Arc::new(card),
            codec: JsonRpcCodec::new(),
        }
    }
}

/// Build the router
///
/// `/api` and `/api/work` accept JSON-RPC, with or without a trailing slash.
/// The agent card is served under `/.well-known/agent.json` and the same path
/// below `/api`. Request bodies are not size limited, so large envelopes still
/// get a JSON-RPC answer instead of a 413.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api", post(handle_rpc))
        .route("/api/", post(handle_rpc))
        .route("/api/work", post(handle_rpc))
        .route("/api/work/", post(handle_rpc))
        .route("/.well-known/agent.json", get(agent_card))
        .route("/api/.well-known/agent.json", get(agent_card))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

/// Bind `addr` and serve until ctrl-c
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    use anyhow::Context;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind agent server on {addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve agent server listen address")?;

    info!(addr = %local_addr, agent = %state.card.name, "Agent server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("agent server exited unexpectedly")?;

    info!("Agent server stopped");
    Ok(())
}

async fn agent_card(State(state): State<AppState>) -> Json<AgentCard> {
    Json(state.card.as_ref().clone())
}

async fn handle_rpc(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let response = dispatch(&state, &body).await;
    let envelope = state.codec.encode_response(response);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, state.codec.content_type().to_string())],
        Json(envelope),
    )
}

/// Run one request body through validation and the agent service
async fn dispatch(state: &AppState, body: &[u8]) -> A2AResponse {
    let document = match state.codec.decode_request(body) {
        Ok(document) => document,
        Err(e) => {
            info!("Unparseable request body: {}", e);
            return A2AResponse::Error {
                id: Value::Null,
                error: e,
            };
        }
    };

    let id = request_id(&document);
    let stack = ServiceBuilder::new()
        .layer(A2AValidationLayer::new())
        .service(state.service.clone());

    let outcome = match tokio::spawn(stack.oneshot(document)).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(id = %id, "Request handler failed: {}", e);
            Err(A2AError::Internal(e.to_string()))
        }
    };

    if let Err(e) = &outcome {
        if let Some(detail) = e.detail() {
            error!(id = %id, code = e.code(), "{}: {}", e, detail);
        }
    }

    let response = A2AResponse::from_outcome(id, outcome);
    info!(id = %response.id(), error = response.is_error(), "Request handled");
    response
}
