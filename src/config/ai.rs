//! AI provider configuration (Gemini)

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration for the companion chat
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub gemini_api_key: Secret<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the Generative Language API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl AiConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Expose the API key for making requests
    pub fn api_key(&self) -> &str {
        self.gemini_api_key.expose_secret()
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key().is_empty() {
            return Err(ValidationError::InvalidGeminiKey);
        }
        Ok(())
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: &str) -> AiConfig {
        AiConfig {
            gemini_api_key: Secret::new(key.to_string()),
            model: default_model(),
            base_url: default_base_url(),
            request_timeout_secs: default_timeout(),
        }
    }

    #[test]
    fn non_empty_key_is_valid() {
        assert!(config("AIzaTest").validate().is_ok());
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(config("").validate().is_err());
    }

    #[test]
    fn default_model_is_flash() {
        assert_eq!(config("k").model, "gemini-2.5-flash");
    }
}
