//! Mock authentication adapter for testing.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::ports::{AuthError, AuthVerifier};

/// Mock verifier for tests.
///
/// Stores a map of tokens to user ids. Tokens not in the map return
/// `InvalidCredentials`.
#[derive(Debug, Default)]
pub struct MockAuthVerifier {
    tokens: RwLock<HashMap<String, UserId>>,
    /// When set, every verification returns this error.
    force_unavailable: RwLock<Option<String>>,
}

impl MockAuthVerifier {
    /// Creates a new empty mock verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user id.
    pub fn with_user(self, token: impl Into<String>, user_id: UserId) -> Self {
        self.tokens.write().unwrap().insert(token.into(), user_id);
        self
    }

    /// Forces all verifications to fail with `ProviderUnavailable`.
    pub fn with_outage(self, reason: impl Into<String>) -> Self {
        *self.force_unavailable.write().unwrap() = Some(reason.into());
        self
    }
}

#[async_trait]
impl AuthVerifier for MockAuthVerifier {
    async fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        if let Some(reason) = self.force_unavailable.read().unwrap().clone() {
            return Err(AuthError::ProviderUnavailable(reason));
        }

        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_resolves_to_user() {
        let verifier =
            MockAuthVerifier::new().with_user("token-1", UserId::new("user-1").unwrap());

        let result = verifier.verify("token-1").await;
        assert_eq!(result.unwrap().as_str(), "user-1");
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let verifier = MockAuthVerifier::new();
        assert!(matches!(
            verifier.verify("nope").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn forced_outage_is_reported() {
        let verifier = MockAuthVerifier::new().with_outage("maintenance");
        assert!(matches!(
            verifier.verify("token-1").await,
            Err(AuthError::ProviderUnavailable(_))
        ));
    }
}
