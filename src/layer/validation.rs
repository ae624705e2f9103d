//! Validation layer for inbound A2A envelopes
//!
//! [`validate_envelope`] walks an untyped JSON-RPC document in a fixed order of
//! stages and stops at the first one that fails:
//!
//! 1. `jsonrpc` is exactly `"2.0"`
//! 2. `params` is an object (absent or null counts as empty)
//! 3. `params.message` is an object
//! 4. `message.parts` is a non-empty array
//! 5. `parts[0]` is an object
//! 6. `parts[0].type` (or legacy `kind`) is `"text"`
//! 7. `parts[0].text` is non-blank
//!
//! Only `parts[0]` is inspected; trailing parts are ignored. The method name is
//! carried through unchecked and resolved later by the agent service.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use serde_json::{Map, Value};
use tower_layer::Layer;
use tower_service::Service;
use tracing::warn;

use crate::{
    protocol::{error::A2AError, message::TEXT_PART_TYPE},
    service::ValidatedRequest,
};

/// The only accepted protocol version
pub const JSONRPC_VERSION: &str = "2.0";

/// Validate an inbound envelope
///
/// Never mutates `document`; validating the same document twice gives the same
/// result.
pub fn validate_envelope(document: &Value) -> Result<ValidatedRequest, A2AError> {
    let envelope = match document.as_object() {
        Some(envelope) if envelope.get("jsonrpc").and_then(Value::as_str) == Some(JSONRPC_VERSION) => {
            envelope
        }
        Some(envelope) => {
            return Err(A2AError::InvalidVersion(describe(envelope.get("jsonrpc"))));
        }
        None => return Err(A2AError::InvalidVersion(describe(None))),
    };

    let empty = Map::new();
    let params = match envelope.get("params") {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(params)) => params,
        Some(_) => return Err(A2AError::MalformedMessage),
    };

    let message = params
        .get("message")
        .and_then(Value::as_object)
        .ok_or(A2AError::MalformedMessage)?;

    let first_part = message
        .get("parts")
        .and_then(Value::as_array)
        .and_then(|parts| parts.first())
        .ok_or(A2AError::MalformedParts)?
        .as_object()
        .ok_or(A2AError::MalformedPart)?;

    let part_type = part_type(first_part);
    if part_type.and_then(Value::as_str) != Some(TEXT_PART_TYPE) {
        return Err(A2AError::UnsupportedPartType(describe(part_type)));
    }

    let text = first_part
        .get("text")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or(A2AError::EmptyText)?;

    Ok(ValidatedRequest {
        id: request_id(document),
        method: method_name(envelope.get("method")),
        message_id: message.get("messageId").cloned().unwrap_or(Value::Null),
        text: text.to_string(),
        part_type: TEXT_PART_TYPE.to_string(),
    })
}

/// The caller's request id, or null when the document has none
pub fn request_id(document: &Value) -> Value {
    document.get("id").cloned().unwrap_or(Value::Null)
}

/// `type` wins over the legacy `kind` key unless it is absent, null or empty
fn part_type(part: &Map<String, Value>) -> Option<&Value> {
    match part.get("type") {
        None | Some(Value::Null) => part.get("kind"),
        Some(Value::String(s)) if s.is_empty() => part.get("kind"),
        present => present,
    }
}

fn method_name(method: Option<&Value>) -> String {
    match method {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render an observed value for an error message
fn describe(value: Option<&Value>) -> String {
    match value {
        None => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Layer that validates raw envelopes before they reach the agent service
#[derive(Clone, Debug, Default)]
pub struct A2AValidationLayer;

impl A2AValidationLayer {
    /// Create a new validation layer
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for A2AValidationLayer {
    type Service = A2AValidationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        A2AValidationService { inner }
    }
}

/// Validation service turning a `Service<ValidatedRequest>` into a `Service<Value>`
#[derive(Clone)]
pub struct A2AValidationService<S> {
    inner: S,
}

impl<S> Service<Value> for A2AValidationService<S>
where
    S: Service<ValidatedRequest, Error = A2AError> + Clone + Send + 'static,
    S::Response: Send + 'static,
    S::Future: Send,
{
    type Response = S::Response;
    type Error = A2AError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, document: Value) -> Self::Future {
        let request = match validate_envelope(&document) {
            Ok(request) => request,
            Err(e) => {
                warn!(id = %request_id(&document), code = e.code(), "Rejected envelope: {}", e);
                return Box::pin(async move { Err(e) });
            }
        };

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(request).await })
    }
}
