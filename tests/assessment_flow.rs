//! Integration tests for the assessment submission flow.
//!
//! Exercises the full path from command to dispatched guardian report:
//! session replay, scoring, severity classification, report assembly, and
//! the fire-and-forget mailer contract.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use nexly::application::handlers::{SubmitAssessmentCommand, SubmitAssessmentHandler};
use nexly::domain::assessment::{ContactInfo, ReportPayload, Severity, MAX_SCORE};
use nexly::ports::{MailError, ReportMailer};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Mailer that records every dispatched report.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<ReportPayload>>,
}

impl RecordingMailer {
    fn new() -> Self {
        Self::default()
    }

    fn sent(&self) -> Vec<ReportPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportMailer for RecordingMailer {
    async fn send_report(&self, report: &ReportPayload) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(report.clone());
        Ok(())
    }
}

/// Mailer that always fails.
struct BrokenMailer;

#[async_trait]
impl ReportMailer for BrokenMailer {
    async fn send_report(&self, _report: &ReportPayload) -> Result<(), MailError> {
        Err(MailError::Unavailable("smtp relay down".to_string()))
    }
}

fn contact() -> ContactInfo {
    ContactInfo {
        user_name: "Jordan".to_string(),
        user_email: "jordan@example.com".to_string(),
        parent_name: "Sam".to_string(),
        parent_email: "sam@example.com".to_string(),
        parent_phone: "555-0100".to_string(),
    }
}

fn command_with_uniform_answers(option_index: u8) -> SubmitAssessmentCommand {
    SubmitAssessmentCommand {
        contact: contact(),
        answers: (1..=10).map(|q| (q, option_index)).collect(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_submission_scores_and_dispatches_report() {
    let mailer = Arc::new(RecordingMailer::new());
    let handler = SubmitAssessmentHandler::new(mailer.clone());

    // All answers "More than half the days": score 20, Severe band
    let result = handler.handle(command_with_uniform_answers(2)).await.unwrap();

    assert_eq!(result.total_score, 20);
    assert_eq!(result.assessment.level, Severity::Severe);
    assert!((result.percentage - 66.7).abs() < 1e-9);
    assert!(result.report_dispatched);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    let report = &sent[0];
    assert_eq!(report.score, 20);
    assert_eq!(report.max_score, MAX_SCORE);
    assert_eq!(report.contact.parent_email, "sam@example.com");
    assert_eq!(report.answers.len(), 10);
    assert!(report
        .answers
        .iter()
        .all(|a| a.answer == "More than half the days"));
}

#[tokio::test]
async fn minimal_answers_land_in_minimal_band() {
    let mailer = Arc::new(RecordingMailer::new());
    let handler = SubmitAssessmentHandler::new(mailer);

    let result = handler.handle(command_with_uniform_answers(0)).await.unwrap();

    assert_eq!(result.total_score, 0);
    assert_eq!(result.assessment.level, Severity::Minimal);
    assert!((result.percentage - 0.0).abs() < 1e-9);
}

#[tokio::test]
async fn reordered_submission_scores_like_a_sequential_one() {
    let mailer = Arc::new(RecordingMailer::new());
    let handler = SubmitAssessmentHandler::new(mailer.clone());

    // Same ten answers, reversed; the set is keyed by question id
    let cmd = SubmitAssessmentCommand {
        contact: contact(),
        answers: (1..=10).rev().map(|q| (q, 1)).collect(),
    };

    let result = handler.handle(cmd).await.unwrap();

    assert_eq!(result.total_score, 10);
    assert_eq!(result.assessment.level, Severity::Moderate);
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn mailer_failure_does_not_fail_the_assessment() {
    let handler = SubmitAssessmentHandler::new(Arc::new(BrokenMailer));

    let result = handler.handle(command_with_uniform_answers(1)).await.unwrap();

    // The user still gets their result; only the dispatch flag reflects the outage
    assert_eq!(result.total_score, 10);
    assert_eq!(result.assessment.level, Severity::Moderate);
    assert!(!result.report_dispatched);
}

#[tokio::test]
async fn incomplete_submission_is_rejected_without_dispatch() {
    let mailer = Arc::new(RecordingMailer::new());
    let handler = SubmitAssessmentHandler::new(mailer.clone());

    let cmd = SubmitAssessmentCommand {
        contact: contact(),
        answers: (1..=9).map(|q| (q, 1)).collect(),
    };

    assert!(handler.handle(cmd).await.is_err());
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn out_of_range_option_is_rejected() {
    let mailer = Arc::new(RecordingMailer::new());
    let handler = SubmitAssessmentHandler::new(mailer.clone());

    let mut cmd = command_with_uniform_answers(1);
    cmd.answers[4].1 = 4;

    assert!(handler.handle(cmd).await.is_err());
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn band_boundaries_classify_exactly() {
    let cases = [
        (0u8, Severity::Minimal),
        (1, Severity::Moderate),
        (2, Severity::Severe),
        (3, Severity::Severe),
    ];

    for (option_index, expected) in cases {
        let handler = SubmitAssessmentHandler::new(Arc::new(RecordingMailer::new()));
        let result = handler
            .handle(command_with_uniform_answers(option_index))
            .await
            .unwrap();
        assert_eq!(
            result.assessment.level, expected,
            "uniform option {} scored {}",
            option_index, result.total_score
        );
    }
}
