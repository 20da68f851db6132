//! HTTP routes for mood quiz endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_questions, submit_mood, MoodHandlers};

/// Creates the mood router with all endpoints.
pub fn mood_routes(handlers: MoodHandlers) -> Router {
    Router::new()
        .route("/", post(submit_mood))
        .route("/questions", get(get_questions))
        .with_state(handlers)
}
