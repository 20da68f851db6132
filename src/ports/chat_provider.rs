//! Chat provider port - interface to the LLM companion backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message in the companion transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Chat provider errors.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("provider returned no content")]
    EmptyResponse,

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Port for generating companion replies.
///
/// The flow is pure passthrough: the caller hands over the role-tagged
/// transcript, the provider prepends its fixed system prompt and returns
/// generated text.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Generates the next assistant reply for the transcript.
    async fn generate_reply(&self, transcript: &[ChatMessage]) -> Result<String, ChatError>;
}
