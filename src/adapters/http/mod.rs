//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod assessment;
pub mod chat;
pub mod error;
pub mod health;
pub mod middleware;
pub mod mood;
pub mod posts;

// Re-export key types for convenience
pub use assessment::{assessment_routes, AssessmentHandlers};
pub use chat::{chat_routes, ChatHandlers};
pub use mood::{mood_routes, MoodHandlers};
pub use posts::{post_routes, PostHandlers};
