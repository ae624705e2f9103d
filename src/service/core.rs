//! Core A2A agent service implementation

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
    time::Duration,
};

use tower_service::Service;
use tracing::{info, warn};

use crate::{
    backend::BackendFactory,
    protocol::{
        error::{A2AError, BackendError},
        operation::A2AOperation,
        task::TaskResult,
    },
    service::{
        id::{IdGenerator, UuidGenerator},
        response::assemble_task,
        ValidatedRequest,
    },
};

/// Default upper bound on a single backend call
pub const DEFAULT_BACKEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Core A2A agent service
///
/// Dispatches a validated request by method name, asks a freshly built backend
/// for an answer and assembles the completed task. The service holds no
/// per-request state, so clones are cheap and requests are independent.
#[derive(Clone)]
pub struct A2AAgentService {
    backends: Arc<dyn BackendFactory>,
    ids: Arc<dyn IdGenerator>,
    timeout: Duration,
}

impl A2AAgentService {
    /// Create a new agent service
    ///
    /// # Arguments
    ///
    /// * `backends` - Builds the generation backend for each request
    pub fn new(backends: Arc<dyn BackendFactory>) -> Self {
        Self {
            backends,
            ids: Arc::new(UuidGenerator),
            timeout: DEFAULT_BACKEND_TIMEOUT,
        }
    }

    /// Use a custom id generator
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Set the backend call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Handle `message/send`
    async fn send_message(
        backends: Arc<dyn BackendFactory>,
        ids: Arc<dyn IdGenerator>,
        timeout: Duration,
        request: ValidatedRequest,
    ) -> Result<TaskResult, A2AError> {
        info!(id = %request.id, "Processing message: '{}'", request.preview());

        let backend = backends.build()?;

        let answer = match tokio::time::timeout(timeout, backend.generate(&request.text)).await {
            Ok(answer) => answer?,
            Err(_) => {
                warn!(backend = backend.name(), "Backend call timed out");
                return Err(BackendError::Timeout(timeout.as_millis()).into());
            }
        };

        let task = assemble_task(&request, answer, ids.as_ref());
        info!(id = %request.id, task_id = %task.id, "Task completed");
        Ok(task)
    }
}

impl Service<ValidatedRequest> for A2AAgentService {
    type Response = TaskResult;
    type Error = A2AError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ValidatedRequest) -> Self::Future {
        let backends = self.backends.clone();
        let ids = self.ids.clone();
        let timeout = self.timeout;

        Box::pin(async move {
            match A2AOperation::from_method(&req.method) {
                Ok(A2AOperation::SendMessage) => {
                    Self::send_message(backends, ids, timeout, req).await
                }
                Err(e) => {
                    warn!(id = %req.id, "Unknown method: {}", req.method);
                    Err(e)
                }
            }
        })
    }
}

impl std::fmt::Debug for A2AAgentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("A2AAgentService")
            .field("timeout", &self.timeout)
            .finish()
    }
}
