//! Foundation - shared value objects and error types for the domain layer.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AssessmentId, PostId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
