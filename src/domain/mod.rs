//! Domain layer - pure business logic with no I/O.

pub mod assessment;
pub mod foundation;
pub mod moderation;
pub mod mood;
pub mod social;
