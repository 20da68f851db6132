//! Email adapters.
//!
//! The guardian report is dispatched through Resend's HTTP API. Rendering
//! is kept separate from transport so the template can be tested without
//! network access.

mod report_renderer;
mod resend_mailer;

pub use report_renderer::{render_report_html, report_subject};
pub use resend_mailer::{ResendConfig, ResendMailer};
