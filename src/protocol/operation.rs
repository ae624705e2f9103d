//! A2A protocol operations

use super::error::A2AError;

/// JSON-RPC method name for [`A2AOperation::SendMessage`]
pub const SEND_MESSAGE_METHOD: &str = "message/send";

/// A2A protocol operations the agent serves
///
/// Dispatch is an exact lookup on the JSON-RPC method name. There is no
/// fallback: anything not in the table is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum A2AOperation {
    /// Send a message to the agent and receive a completed task
    SendMessage,
}

impl A2AOperation {
    /// Resolve a JSON-RPC method name to an operation
    pub fn from_method(method: &str) -> Result<Self, A2AError> {
        match method {
            SEND_MESSAGE_METHOD => Ok(A2AOperation::SendMessage),
            other => Err(A2AError::UnknownMethod(other.to_string())),
        }
    }
}
