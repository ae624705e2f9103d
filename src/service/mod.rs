//! Tower Service implementations

pub mod core;
pub mod id;
pub mod request;
pub mod response;

pub use self::core::A2AAgentService;
pub use id::{IdGenerator, UuidGenerator};
pub use request::ValidatedRequest;
pub use response::{assemble_task, A2AResponse};
