//! Resend implementation of the ReportMailer port.
//!
//! Sends the rendered guardian report through Resend's `/emails` endpoint.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ResendConfig::new(api_key, "Nexly Wellness <noreply@nexly.app>");
//! let mailer = ResendMailer::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::assessment::ReportPayload;
use crate::ports::{MailError, ReportMailer};

use super::report_renderer::{render_report_html, report_subject};

/// Configuration for the Resend mailer.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// From header value, e.g. `Nexly Wellness <noreply@nexly.app>`.
    pub from: String,
    /// Base URL for the API (default: https://api.resend.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ResendConfig {
    /// Creates a new configuration with the given API key and From header.
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            from: from.into(),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Resend API mailer.
pub struct ResendMailer {
    config: ResendConfig,
    client: Client,
}

impl ResendMailer {
    /// Creates a new mailer with the given configuration.
    pub fn new(config: ResendConfig) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MailError::Unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url)
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    #[allow(dead_code)]
    id: String,
}

#[async_trait]
impl ReportMailer for ResendMailer {
    async fn send_report(&self, report: &ReportPayload) -> Result<(), MailError> {
        let request = SendEmailRequest {
            from: self.config.from.clone(),
            to: vec![report.contact.parent_email.clone()],
            subject: report_subject(report),
            html: render_report_html(report),
        };

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    MailError::Network(e.to_string())
                } else {
                    MailError::Unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            let body: SendEmailResponse = response
                .json()
                .await
                .map_err(|e| MailError::Unavailable(format!("Malformed response: {}", e)))?;
            tracing::info!(email_id = %body.id, "guardian report dispatched");
            return Ok(());
        }

        let error_body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            400..=499 => Err(MailError::Rejected(format!(
                "Resend rejected the request ({}): {}",
                status, error_body
            ))),
            _ => Err(MailError::Unavailable(format!(
                "Resend error {}: {}",
                status, error_body
            ))),
        }
    }
}
