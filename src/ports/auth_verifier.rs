//! Auth verifier port.
//!
//! The identity provider is an external collaborator: it hands us an opaque
//! authenticated-user identifier which the core neither parses nor
//! validates. This port turns a bearer credential into that identifier.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::UserId;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing credentials")]
    MissingCredentials,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),
}

/// Port for resolving a bearer credential to an opaque user id.
#[async_trait]
pub trait AuthVerifier: Send + Sync {
    /// Verifies the credential and returns the authenticated user's id.
    async fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}
