//! # A2A Code Helper
//!
//! A single-turn Agent2Agent (A2A) agent served over JSON-RPC 2.0.
//!
//! Each `message/send` call is validated, answered by a generation backend and
//! returned as a completed task in one response. The pieces are Tower services
//! and layers, so the request pipeline can be driven without HTTP.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use a2a_code_helper::prelude::*;
//! use serde_json::json;
//! use tower::{ServiceBuilder, ServiceExt};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backends = Arc::new(GeminiConfig::new(std::env::var("GEMINI_API_KEY").ok()));
//!     let agent = ServiceBuilder::new()
//!         .layer(A2AValidationLayer::new())
//!         .service(A2AAgentService::new(backends));
//!
//!     let task = agent
//!         .oneshot(json!({
//!             "jsonrpc": "2.0",
//!             "id": 1,
//!             "method": "message/send",
//!             "params": {"message": {"parts": [{"type": "text", "text": "What is a closure?"}]}}
//!         }))
//!         .await?;
//!     println!("{}", task.answer().unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod codec;
pub mod config;
pub mod layer;
pub mod protocol;
pub mod server;
pub mod service;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        backend::{BackendFactory, GeminiConfig, GenerationBackend},
        config::AgentConfig,
        layer::A2AValidationLayer,
        protocol::error::{A2AError, BackendError},
        protocol::{AgentCard, Message, MessagePart, Role, TaskResult, TaskStatus},
        service::{A2AAgentService, A2AResponse, IdGenerator},
    };
}
