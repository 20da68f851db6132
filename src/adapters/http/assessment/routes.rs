//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_questions, submit_report, AssessmentHandlers};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/questions", get(get_questions))
        .route("/report", post(submit_report))
        .with_state(handlers)
}
