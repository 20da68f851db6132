//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod auth_verifier;
mod chat_provider;
mod post_repository;
mod report_mailer;

pub use auth_verifier::{AuthError, AuthVerifier};
pub use chat_provider::{ChatError, ChatMessage, ChatProvider, ChatRole};
pub use post_repository::PostRepository;
pub use report_mailer::{MailError, ReportMailer};
