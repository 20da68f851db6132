//! Opaque-token verifier.
//!
//! The platform gateway authenticates users before requests reach this
//! service and forwards the subject as the bearer credential. This adapter
//! accepts that value as the opaque user id without inspecting it further.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::ports::{AuthError, AuthVerifier};

/// Pass-through verifier for gateway-terminated authentication.
#[derive(Debug, Clone, Default)]
pub struct OpaqueTokenVerifier;

impl OpaqueTokenVerifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuthVerifier for OpaqueTokenVerifier {
    async fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        UserId::new(token).map_err(|_| AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn token_becomes_user_id() {
        let verifier = OpaqueTokenVerifier::new();
        let user = verifier.verify("user-42").await.unwrap();
        assert_eq!(user.as_str(), "user-42");
    }

    #[tokio::test]
    async fn blank_token_is_rejected() {
        let verifier = OpaqueTokenVerifier::new();
        assert!(matches!(
            verifier.verify("   ").await,
            Err(AuthError::InvalidCredentials)
        ));
    }
}
