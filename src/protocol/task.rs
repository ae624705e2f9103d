//! A2A task result types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{message::Message, Artifact};

/// The result of a completed `message/send` call
///
/// The agent is single-turn: every task is created, answered and completed
/// within one request, and nothing about it outlives the response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskResult {
    /// Freshly generated task identifier
    pub id: String,

    /// Context identifier, the inbound message id
    #[serde(rename = "contextId")]
    pub context_id: Value,

    /// Final status of the task
    pub status: TaskStatus,

    /// Named outputs of the task
    pub artifacts: Vec<Artifact>,

    /// User turn followed by agent turn
    pub history: Vec<Message>,
}

impl TaskResult {
    /// The agent's reply text
    pub fn answer(&self) -> Option<&str> {
        self.status.message.text()
    }
}

/// Task status with the message that produced it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskStatus {
    /// Lifecycle state
    pub state: TaskState,

    /// Agent message attached to this state
    pub message: Message,
}

impl TaskStatus {
    /// A completed status carrying the agent's reply
    pub fn completed(message: Message) -> Self {
        Self {
            state: TaskState::Completed,
            message,
        }
    }
}

/// Task state in the A2A protocol lifecycle
///
/// Tasks are answered within the request that created them, so the only state
/// ever reported is `completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskState {
    /// Task completed successfully
    Completed,
}
