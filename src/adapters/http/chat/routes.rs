//! HTTP routes for companion chat endpoints.

use axum::{routing::post, Router};

use super::handlers::{send_message, ChatHandlers};

/// Creates the chat router.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new().route("/", post(send_message)).with_state(handlers)
}
