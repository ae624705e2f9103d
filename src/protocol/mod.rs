//! Core A2A protocol types and definitions

use serde::{Deserialize, Serialize};

pub mod agent;
pub mod error;
pub mod message;
pub mod operation;
pub mod task;

pub use agent::{AgentCapabilities, AgentCard};
pub use error::{A2AError, BackendError};
pub use message::{Message, MessagePart, Role};
pub use operation::A2AOperation;
pub use task::{TaskResult, TaskState, TaskStatus};

/// Name of the artifact holding the agent's answer
pub const AGENT_RESPONSE_ARTIFACT: &str = "agent_response";

/// Name of the artifact holding the user's question
pub const ORIGINAL_QUERY_ARTIFACT: &str = "original_query";

/// Artifacts represent task outputs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artifact {
    /// A human readable name for the Artifact
    pub name: String,

    /// Contents of the Artifact. Must contain at least one part
    pub parts: Vec<MessagePart>,
}

impl Artifact {
    /// Create a single text part artifact
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parts: vec![MessagePart::text(text)],
        }
    }

    /// Artifact carrying the generated answer
    pub fn agent_response(answer: impl Into<String>) -> Self {
        Self::text(AGENT_RESPONSE_ARTIFACT, answer)
    }

    /// Artifact carrying the user's trimmed question
    pub fn original_query(query: impl Into<String>) -> Self {
        Self::text(ORIGINAL_QUERY_ARTIFACT, query)
    }
}
