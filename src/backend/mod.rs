//! Generation backend abstraction
//!
//! The agent service depends on the [`GenerationBackend`] capability only. A
//! [`BackendFactory`] builds one backend per request, which is where a missing
//! credential surfaces as [`BackendError::Unconfigured`].

pub mod gemini;
#[cfg(test)]
pub(crate) mod mock;

use std::sync::Arc;

pub use gemini::{GeminiBackend, GeminiConfig};

use async_trait::async_trait;

use crate::protocol::error::BackendError;

/// Text generation capability
///
/// Implementations either return generated text or fail with
/// [`BackendError::Unreachable`]. The returned text is embedded as is.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate an answer for non-empty user text
    async fn generate(&self, text: &str) -> Result<String, BackendError>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "backend"
    }
}

/// Builds a generation backend for one request
pub trait BackendFactory: Send + Sync {
    /// Construct a backend, failing with [`BackendError::Unconfigured`] when
    /// required configuration is missing
    fn build(&self) -> Result<Arc<dyn GenerationBackend>, BackendError>;
}

impl<F> BackendFactory for F
where
    F: Fn() -> Result<Arc<dyn GenerationBackend>, BackendError> + Send + Sync,
{
    fn build(&self) -> Result<Arc<dyn GenerationBackend>, BackendError> {
        self()
    }
}
