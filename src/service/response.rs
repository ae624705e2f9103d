//! A2A service response types and task result assembly

use serde_json::Value;

use crate::{
    protocol::{
        error::A2AError,
        message::{Message, MessagePart},
        task::{TaskResult, TaskStatus},
        Artifact,
    },
    service::{id::IdGenerator, request::ValidatedRequest},
};

/// Outcome of one JSON-RPC call, ready to be encoded
#[derive(Debug, Clone)]
pub enum A2AResponse {
    /// Completed task (from `message/send`)
    Task {
        /// Caller-supplied request id
        id: Value,

        /// The completed task
        task: Box<TaskResult>,
    },

    /// Rejected request
    Error {
        /// Caller-supplied request id, null when the body could not be parsed
        id: Value,

        /// Why the request was rejected
        error: A2AError,
    },
}

impl A2AResponse {
    /// Build a response from a service outcome
    pub fn from_outcome(id: Value, outcome: Result<TaskResult, A2AError>) -> Self {
        match outcome {
            Ok(task) => A2AResponse::Task {
                id,
                task: Box::new(task),
            },
            Err(error) => A2AResponse::Error { id, error },
        }
    }

    /// The request id this response answers
    pub fn id(&self) -> &Value {
        match self {
            A2AResponse::Task { id, .. } | A2AResponse::Error { id, .. } => id,
        }
    }

    /// Check if the response is an error
    pub fn is_error(&self) -> bool {
        matches!(self, A2AResponse::Error { .. })
    }
}

/// Assemble the completed task for a validated request and the backend's answer
///
/// Draws two fresh ids from `ids`, first the outbound message id and then the
/// task id. The outbound message id is shared by `status.message` and the
/// agent history entry; the user history entry echoes the inbound ids.
pub fn assemble_task(request: &ValidatedRequest, answer: String, ids: &dyn IdGenerator) -> TaskResult {
    let response_message_id = ids.next_id();
    let task_id = ids.next_id();

    let parts_response = vec![MessagePart::new(request.part_type.clone(), answer.clone())];

    let artifacts = vec![
        Artifact::agent_response(answer),
        Artifact::original_query(request.text.clone()),
    ];

    let history = vec![
        Message::user(
            vec![MessagePart::new(request.part_type.clone(), request.text.clone())],
            request.message_id.clone(),
        )
        .with_id(request.id.clone()),
        Message::agent(parts_response.clone(), response_message_id.clone())
            .with_id(task_id.clone()),
    ];

    TaskResult {
        id: task_id,
        context_id: request.message_id.clone(),
        status: TaskStatus::completed(Message::agent(parts_response, response_message_id)),
        artifacts,
        history,
    }
}
