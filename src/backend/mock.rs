use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::{
    backend::{BackendFactory, GenerationBackend},
    protocol::error::BackendError,
};

/// Mock backend for internal testing
///
/// Answers through a handler closure so unit tests can script the backend
/// without a network connection.
#[derive(Clone)]
pub(crate) struct MockBackend {
    handler: Arc<dyn Fn(&str) -> Result<String, BackendError> + Send + Sync>,
    delay: Option<Duration>,
}

impl MockBackend {
    /// Create a new mock backend with a custom handler
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&str) -> Result<String, BackendError> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            delay: None,
        }
    }

    /// Create a mock backend that always answers `answer`
    pub fn answering(answer: &str) -> Self {
        let answer = answer.to_string();
        Self::new(move |_| Ok(answer.clone()))
    }

    /// Create a mock backend whose calls always fail
    pub fn unreachable() -> Self {
        Self::new(|_| Err(BackendError::Unreachable("connection refused".into())))
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Factory handing out this backend on every build
    pub fn factory(self) -> Arc<dyn BackendFactory> {
        let backend: Arc<dyn GenerationBackend> = Arc::new(self);
        Arc::new(move || -> Result<Arc<dyn GenerationBackend>, BackendError> {
            Ok(backend.clone())
        })
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(&self, text: &str) -> Result<String, BackendError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.handler)(text)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Factory that always fails as if no credential were configured
pub(crate) fn unconfigured_factory() -> Arc<dyn BackendFactory> {
    Arc::new(|| -> Result<Arc<dyn GenerationBackend>, BackendError> {
        Err(BackendError::Unconfigured("GEMINI_API_KEY is not set".into()))
    })
}

impl std::fmt::Debug for MockBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockBackend").finish()
    }
}
