//! Identifier generation for task results

use uuid::Uuid;

/// Source of fresh identifiers for tasks and outbound messages
///
/// Injected into the agent service so tests can produce deterministic ids.
/// Any `Fn() -> String` closure is an `IdGenerator`.
pub trait IdGenerator: Send + Sync {
    /// Return an identifier not returned before
    fn next_id(&self) -> String;
}

/// Generates time-ordered UUID v7 strings
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids = UuidGenerator;
        let first = ids.next_id();
        let second = ids.next_id();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }

    #[test]
    fn test_closure_generator() {
        let counter = AtomicUsize::new(0);
        let ids = move || format!("id-{}", counter.fetch_add(1, Ordering::SeqCst));

        assert_eq!(ids.next_id(), "id-0");
        assert_eq!(ids.next_id(), "id-1");
    }
}
