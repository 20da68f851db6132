//! Shared HTTP error envelope.
//!
//! All feature handlers return errors in this shape so clients can rely on
//! a single error contract across the API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Maps a domain error to its HTTP response.
pub fn domain_error_response(error: DomainError) -> Response {
    match error.code() {
        ErrorCode::ValidationFailed | ErrorCode::InvalidInput => {
            let mut body = ErrorResponse::bad_request(error.message());
            if !error.details().is_empty() {
                body = body.with_details(serde_json::json!(error.details()));
            }
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        ErrorCode::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Resource", error.message())),
        )
            .into_response(),
        ErrorCode::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                code: "UNAUTHORIZED".to_string(),
                message: error.message().to_string(),
                details: None,
            }),
        )
            .into_response(),
        ErrorCode::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                code: "FORBIDDEN".to_string(),
                message: error.message().to_string(),
                details: None,
            }),
        )
            .into_response(),
        ErrorCode::AiProviderError => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                code: "AI_PROVIDER_ERROR".to_string(),
                message: error.message().to_string(),
                details: None,
            }),
        )
            .into_response(),
        _ => {
            tracing::error!(code = ?error.code(), "request failed: {}", error.message());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An unexpected error occurred")),
            )
                .into_response()
        }
    }
}
