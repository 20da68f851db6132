//! Authentication middleware and extractors for axum.
//!
//! The middleware validates the Bearer credential through the `AuthVerifier`
//! port and injects the resolved `UserId` into request extensions. Handlers
//! that need an authenticated caller use the `RequireAuth` extractor; routes
//! without it stay anonymous.
//!
//! ```text
//! Request → auth_middleware → injects UserId into extensions
//!                                   ↓
//!                           Handler → RequireAuth extractor reads it back
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::UserId;
use crate::ports::{AuthError, AuthVerifier};

/// Auth middleware state - wraps the verifier port.
pub type AuthState = Arc<dyn AuthVerifier>;

/// Middleware that resolves Bearer tokens to user ids.
///
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Verifies it through the `AuthVerifier` port
/// 3. On success, injects `UserId` into request extensions
/// 4. On missing token, continues without injecting (anonymous routes)
/// 5. On invalid token, returns 401 Unauthorized
pub async fn auth_middleware(
    State(verifier): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match verifier.verify(token).await {
            Ok(user_id) => {
                request.extensions_mut().insert(user_id);
                next.run(request).await
            }
            Err(e) => {
                let (status, message) = match &e {
                    AuthError::MissingCredentials => {
                        (StatusCode::UNAUTHORIZED, "Missing credentials")
                    }
                    AuthError::InvalidCredentials => {
                        (StatusCode::UNAUTHORIZED, "Invalid credentials")
                    }
                    AuthError::ProviderUnavailable(reason) => {
                        tracing::error!("Identity provider unavailable: {}", reason);
                        (
                            StatusCode::SERVICE_UNAVAILABLE,
                            "Authentication service unavailable",
                        )
                    }
                };

                (
                    status,
                    Json(serde_json::json!({
                        "error": message,
                        "code": "AUTH_ERROR"
                    })),
                )
                    .into_response()
            }
        },
        // No token provided - handlers enforce auth via RequireAuth
        None => next.run(request).await,
    }
}

/// Extractor that requires an authenticated caller.
///
/// Returns 401 Unauthorized when no verified `UserId` is present in the
/// request extensions.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub UserId);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<UserId>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No verified credential accompanied the request.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}
