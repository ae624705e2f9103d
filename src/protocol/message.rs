//! A2A message types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only part type the agent accepts and emits
pub const TEXT_PART_TYPE: &str = "text";

/// A message in the A2A protocol
///
/// Messages appear in a task result both as `status.message` and as `history`
/// entries. History entries additionally carry an `id`: the caller's request id
/// for the user turn and the task id for the agent turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Request or task id, present on history entries only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    /// Role of the message sender
    pub role: Role,

    /// Message content parts
    pub parts: Vec<MessagePart>,

    /// Object kind, always "message"
    #[serde(default = "message_kind")]
    pub kind: String,

    /// Message identifier, echoed verbatim for inbound messages
    #[serde(rename = "messageId")]
    pub message_id: Value,
}

fn message_kind() -> String {
    "message".to_string()
}

impl Message {
    /// Create a new message
    pub fn new(role: Role, parts: Vec<MessagePart>, message_id: impl Into<Value>) -> Self {
        Self {
            id: None,
            role,
            parts,
            kind: message_kind(),
            message_id: message_id.into(),
        }
    }

    /// Create a user message
    pub fn user(parts: Vec<MessagePart>, message_id: impl Into<Value>) -> Self {
        Self::new(Role::User, parts, message_id)
    }

    /// Create an agent message
    pub fn agent(parts: Vec<MessagePart>, message_id: impl Into<Value>) -> Self {
        Self::new(Role::Agent, parts, message_id)
    }

    /// Attach a request or task id, turning the message into a history entry
    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Text of the first part, if any
    pub fn text(&self) -> Option<&str> {
        self.parts.first().map(|part| part.text.as_str())
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from a user
    User,

    /// Message from an AI agent
    Agent,
}

/// A part of a message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessagePart {
    /// Content type tag
    #[serde(rename = "type")]
    pub part_type: String,

    /// The text content
    pub text: String,
}

impl MessagePart {
    /// Create a part with an explicit type tag
    pub fn new(part_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            part_type: part_type.into(),
            text: text.into(),
        }
    }

    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(TEXT_PART_TYPE, text)
    }
}
