//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerDto, ContactInfoDto, QuestionResponse, SubmitReportRequest, SubmitReportResponse,
};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
