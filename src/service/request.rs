//! A2A service request types

use serde_json::Value;

/// A request that passed envelope validation
///
/// Produced only by [`validate_envelope`](crate::layer::validation::validate_envelope),
/// so every field already satisfies the envelope invariants: the protocol
/// version was "2.0", the first message part was a text part and its trimmed
/// text is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    /// Caller-supplied request id, echoed verbatim
    pub id: Value,

    /// JSON-RPC method name, not yet dispatched
    pub method: String,

    /// Inbound message id, echoed verbatim
    pub message_id: Value,

    /// Trimmed text of the first message part
    pub text: String,

    /// Type tag of the first message part
    pub part_type: String,
}

impl ValidatedRequest {
    /// Create a `message/send` request with a text part
    pub fn send_message(
        id: impl Into<Value>,
        message_id: impl Into<Value>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            method: crate::protocol::operation::SEND_MESSAGE_METHOD.to_string(),
            message_id: message_id.into(),
            text: text.into(),
            part_type: crate::protocol::message::TEXT_PART_TYPE.to_string(),
        }
    }

    /// Replace the method name
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// First characters of the text, for logging
    pub fn preview(&self) -> String {
        preview(&self.text)
    }
}

/// First 50 characters of `text`, for logging
pub(crate) fn preview(text: &str) -> String {
    const PREVIEW_CHARS: usize = 50;

    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
