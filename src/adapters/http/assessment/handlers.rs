//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::{SubmitAssessmentCommand, SubmitAssessmentHandler};
use crate::domain::assessment::{MAX_SCORE, QUESTIONS};

use super::dto::{QuestionResponse, SubmitReportRequest, SubmitReportResponse};

/// Handler state for the assessment router.
#[derive(Clone)]
pub struct AssessmentHandlers {
    submit_handler: Arc<SubmitAssessmentHandler>,
}

impl AssessmentHandlers {
    pub fn new(submit_handler: Arc<SubmitAssessmentHandler>) -> Self {
        Self { submit_handler }
    }
}

/// GET /api/assessment/questions - The screening questionnaire
pub async fn get_questions() -> Response {
    let body: Vec<QuestionResponse> = QUESTIONS.iter().map(QuestionResponse::from).collect();
    (StatusCode::OK, Json(body)).into_response()
}

/// POST /api/assessment/report - Score a completed run and dispatch the guardian report
pub async fn submit_report(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<SubmitReportRequest>,
) -> Response {
    let cmd = SubmitAssessmentCommand {
        contact: req.contact.into(),
        answers: req
            .answers
            .iter()
            .map(|a| (a.question_id, a.option_index))
            .collect(),
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = SubmitReportResponse {
                assessment_id: result.assessment_id.to_string(),
                score: result.total_score,
                max_score: MAX_SCORE,
                percentage: result.percentage,
                severity: result.assessment.level.label().to_string(),
                description: result.assessment.description().to_string(),
                report_dispatched: result.report_dispatched,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
