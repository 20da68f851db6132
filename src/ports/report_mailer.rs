//! Report mailer port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::assessment::ReportPayload;

/// Errors from the email collaborator.
///
/// The assessment flow treats dispatch as fire-and-forget: these errors are
/// logged and surfaced as `report_dispatched: false`, never as a failed
/// assessment.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("email provider rejected the request: {0}")]
    Rejected(String),

    #[error("email provider unavailable: {0}")]
    Unavailable(String),

    #[error("network error: {0}")]
    Network(String),
}

/// Port for dispatching the guardian report email.
#[async_trait]
pub trait ReportMailer: Send + Sync {
    /// Renders and sends the report to the guardian's address.
    async fn send_report(&self, report: &ReportPayload) -> Result<(), MailError>;
}
