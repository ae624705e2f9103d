//! JSON-RPC 2.0 codec for the A2A endpoint
//!
//! Decodes request bodies into untyped documents and encodes service outcomes
//! into JSON-RPC 2.0 response envelopes. Error envelopes are built here from
//! the code and message of an [`A2AError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    layer::validation::JSONRPC_VERSION,
    protocol::{error::A2AError, task::TaskResult},
    service::response::A2AResponse,
};

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcResponse {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,

    /// Echoed request id; serialized even when null
    pub id: Value,

    /// Completed task, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TaskResult>,

    /// Error object, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonRpcError {
    /// JSON-RPC error code
    pub code: i64,

    /// Caller-facing message; backend detail never appears here
    pub message: String,
}

impl From<&A2AError> for JsonRpcError {
    fn from(err: &A2AError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// JSON-RPC 2.0 codec
#[derive(Debug, Clone, Default)]
pub struct JsonRpcCodec;

impl JsonRpcCodec {
    /// Create a new JSON-RPC codec
    pub fn new() -> Self {
        Self
    }

    /// Parse a request body into an untyped document
    ///
    /// Only syntax is checked here; shape is left to envelope validation.
    pub fn decode_request(&self, body: &[u8]) -> Result<Value, A2AError> {
        serde_json::from_slice(body).map_err(A2AError::from)
    }

    /// Wrap a service outcome in a JSON-RPC envelope
    pub fn encode_response(&self, response: A2AResponse) -> JsonRpcResponse {
        match response {
            A2AResponse::Task { id, task } => JsonRpcResponse {
                jsonrpc: JSONRPC_VERSION.to_string(),
                id,
                result: Some(*task),
                error: None,
            },
            A2AResponse::Error { id, error } => {
                let error = JsonRpcError::from(&error);
                debug!(
                    id = %id,
                    code = error.code,
                    "Error response: {}",
                    error.message
                );
                JsonRpcResponse {
                    jsonrpc: JSONRPC_VERSION.to_string(),
                    id,
                    result: None,
                    error: Some(error),
                }
            }
        }
    }

    /// Get the content type for this codec
    pub fn content_type(&self) -> &str {
        "application/json"
    }
}
