//! SubmitAssessment - Command handler for a completed screening run.
//!
//! Scores and classifies the answer set, assembles the guardian report,
//! and dispatches it through the mailer port. Dispatch is fire-and-forget:
//! a mailer failure is logged and reported as `report_dispatched: false`,
//! but the user still receives their result.

use std::sync::Arc;

use crate::domain::assessment::{
    build_report, AssessmentSession, ContactInfo, SessionState, SeverityAssessment,
};
use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::ReportMailer;

/// Command carrying the contact details and all ten answers.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub contact: ContactInfo,
    /// (question_id, option_index) pairs, one per question, in answer order.
    pub answers: Vec<(u8, u8)>,
}

/// Result shown to the user regardless of dispatch outcome.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub assessment_id: AssessmentId,
    pub total_score: u8,
    pub percentage: f64,
    pub assessment: SeverityAssessment,
    pub report_dispatched: bool,
}

/// Handler for assessment submissions.
pub struct SubmitAssessmentHandler {
    mailer: Arc<dyn ReportMailer>,
}

impl SubmitAssessmentHandler {
    pub fn new(mailer: Arc<dyn ReportMailer>) -> Self {
        Self { mailer }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, DomainError> {
        // 1. Replay the submission through the session state machine.
        // Answers are a mapping keyed by question id; clients may submit
        // them in any order, so sort before the in-order replay.
        let mut answers = cmd.answers;
        answers.sort_by_key(|&(question_id, _)| question_id);

        let mut session = AssessmentSession::new();
        session.collect_contact(cmd.contact.clone())?;
        session.begin_questions()?;
        for (question_id, option_index) in &answers {
            session.record_answer(*question_id, *option_index)?;
        }

        if *session.state() != SessionState::Scored {
            return Err(DomainError::invalid_input(
                "Submission did not answer every question",
            ));
        }
        let outcome = session
            .outcome()
            .cloned()
            .ok_or_else(|| DomainError::invalid_input("Scored session has no outcome"))?;

        // 2. Assemble and dispatch the guardian report
        let report = build_report(
            cmd.contact,
            outcome.total_score,
            &outcome.assessment,
            session.answers(),
        )?;
        let percentage = report.percentage;

        let report_dispatched = match self.mailer.send_report(&report).await {
            Ok(()) => {
                session.mark_report_dispatched()?;
                true
            }
            Err(e) => {
                // Fire-and-forget: the user-visible result is unaffected.
                tracing::warn!(error = %e, "guardian report dispatch failed");
                false
            }
        };

        Ok(SubmitAssessmentResult {
            assessment_id: session.id(),
            total_score: outcome.total_score,
            percentage,
            assessment: outcome.assessment,
            report_dispatched,
        })
    }
}
