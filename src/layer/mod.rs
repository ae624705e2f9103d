//! Tower Layer implementations for A2A envelopes

pub mod validation;

pub use validation::{validate_envelope, A2AValidationLayer, A2AValidationService};
