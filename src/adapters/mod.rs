//! Adapters - Implementations of the ports.
//!
//! Each adapter translates between the outside world (HTTP, PostgreSQL,
//! Gemini, Resend) and the ports the application layer depends on.

pub mod ai;
pub mod auth;
pub mod email;
pub mod http;
pub mod postgres;
