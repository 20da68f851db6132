//! HTTP handlers for mood quiz endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::{SubmitMoodCommand, SubmitMoodHandler};
use crate::domain::mood::{MoodAnswer, MOOD_QUESTIONS};

use super::dto::{MoodQuestionResponse, SubmitMoodRequest, SubmitMoodResponse};

/// Handler state for the mood router.
#[derive(Clone)]
pub struct MoodHandlers {
    submit_handler: SubmitMoodHandler,
}

impl MoodHandlers {
    pub fn new(submit_handler: SubmitMoodHandler) -> Self {
        Self { submit_handler }
    }
}

/// GET /api/mood/questions - The mood quiz
pub async fn get_questions() -> Response {
    let body: Vec<MoodQuestionResponse> =
        MOOD_QUESTIONS.iter().map(MoodQuestionResponse::from).collect();
    (StatusCode::OK, Json(body)).into_response()
}

/// POST /api/mood - Tally a completed quiz
pub async fn submit_mood(
    State(handlers): State<MoodHandlers>,
    Json(req): Json<SubmitMoodRequest>,
) -> Response {
    let cmd = SubmitMoodCommand {
        answers: req.answers.iter().map(MoodAnswer::from).collect(),
    };

    match handlers.submit_handler.handle(cmd) {
        Ok(summary) => {
            (StatusCode::OK, Json(SubmitMoodResponse::from(&summary))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
