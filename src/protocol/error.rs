//! Error types for A2A protocol operations
//!
//! Every failure the agent can hit while handling a request is an [`A2AError`]
//! variant. Each variant carries a stable JSON-RPC error code and a wire message,
//! which is what a calling agent branches on.

use thiserror::Error;

/// Body is not well-formed JSON
pub const PARSE_ERROR: i64 = -32700;

/// Envelope or message shape is invalid
pub const INVALID_REQUEST: i64 = -32600;

/// Method is not in the dispatch table
pub const METHOD_NOT_FOUND: i64 = -32601;

/// Internal failure, including an unreachable backend
pub const INTERNAL_ERROR: i64 = -32603;

/// Agent could not be constructed
pub const SERVER_ERROR: i64 = -32000;

/// Main error type for A2A protocol operations
///
/// The `Display` output of each variant is the message placed in the JSON-RPC
/// error object. Variants holding a detail string that does not appear in the
/// message keep it for logging only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum A2AError {
    /// Request body is not well-formed structured data
    #[error("Parse error: {0}")]
    Parse(String),

    /// `jsonrpc` field is absent or not exactly "2.0"
    #[error("Invalid Request: Unsupported JSON-RPC version '{0}'")]
    InvalidVersion(String),

    /// `params.message` is missing or not an object
    #[error("Invalid Request: 'params.message' is not an object")]
    MalformedMessage,

    /// `params.message.parts` is missing, not a sequence, or empty
    #[error("Invalid Request: 'params.message.parts' is missing or empty")]
    MalformedParts,

    /// First message part is not an object
    #[error("Invalid Request: First message part is not an object")]
    MalformedPart,

    /// First message part is not a text part
    #[error("Invalid Request: First message part type must be 'text', got '{0}'")]
    UnsupportedPartType(String),

    /// First message part text is blank after trimming
    #[error("Invalid Request: User text is empty")]
    EmptyText,

    /// Method name is not supported
    #[error("Method not found: {0}")]
    UnknownMethod(String),

    /// Generation backend could not be constructed
    #[error("Server error: AI agent could not be initialized")]
    BackendUnconfigured(String),

    /// Generation backend call failed or timed out
    #[error("AI agent is unreachable at the moment")]
    BackendUnreachable(String),

    /// Any other failure
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl A2AError {
    /// JSON-RPC error code for this failure
    pub fn code(&self) -> i64 {
        match self {
            A2AError::Parse(_) => PARSE_ERROR,
            A2AError::InvalidVersion(_)
            | A2AError::MalformedMessage
            | A2AError::MalformedParts
            | A2AError::MalformedPart
            | A2AError::UnsupportedPartType(_)
            | A2AError::EmptyText => INVALID_REQUEST,
            A2AError::UnknownMethod(_) => METHOD_NOT_FOUND,
            A2AError::BackendUnconfigured(_) => SERVER_ERROR,
            A2AError::BackendUnreachable(_) | A2AError::Internal(_) => INTERNAL_ERROR,
        }
    }

    /// Backend detail for the server log; never sent to the caller
    pub fn detail(&self) -> Option<&str> {
        match self {
            A2AError::BackendUnconfigured(detail) | A2AError::BackendUnreachable(detail) => {
                Some(detail)
            }
            _ => None,
        }
    }
}

/// Failure reported by a generation backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Backend is missing required configuration (e.g. an API key)
    #[error("backend is not configured: {0}")]
    Unconfigured(String),

    /// Backend call failed before producing any text
    #[error("backend call failed: {0}")]
    Unreachable(String),

    /// Backend call exceeded the configured timeout
    #[error("backend call timed out after {0} ms")]
    Timeout(u128),
}

impl From<BackendError> for A2AError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unconfigured(detail) => A2AError::BackendUnconfigured(detail),
            other @ (BackendError::Unreachable(_) | BackendError::Timeout(_)) => {
                A2AError::BackendUnreachable(other.to_string())
            }
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Unreachable(format!("request timed out: {}", err))
        } else if err.is_connect() {
            BackendError::Unreachable(format!("connection error: {}", err))
        } else {
            BackendError::Unreachable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for A2AError {
    fn from(err: serde_json::Error) -> Self {
        A2AError::Parse(err.to_string())
    }
}
