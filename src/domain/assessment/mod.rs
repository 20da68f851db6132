//! Depression screening assessment.
//!
//! Converts the fixed 10-question questionnaire into a deterministic
//! severity classification and assembles the guardian report payload.
//! Scoring and classification are pure; the session type drives the
//! surrounding flow.

mod questionnaire;
mod report;
mod scoring;
mod session;
mod severity;

pub use questionnaire::{
    question_by_id, Question, FREQUENCY_OPTIONS, OPTIONS_PER_QUESTION, QUESTIONS, QUESTION_COUNT,
};
pub use report::{build_report, score_percentage, AnsweredQuestion, ContactInfo, ReportPayload};
pub use scoring::{score, AnswerSet, MAX_OPTION_INDEX, MAX_SCORE};
pub use session::{AssessmentSession, SessionOutcome, SessionState};
pub use severity::{classify, Severity, SeverityAssessment};
