//! SendChatMessage - Command handler for the companion chat.
//!
//! Pure passthrough: validates the transcript shape and forwards it to the
//! chat provider port. The provider owns the system prompt and generation
//! settings.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ChatError, ChatMessage, ChatProvider};

/// Command carrying the conversation transcript, oldest first.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub transcript: Vec<ChatMessage>,
}

/// Handler for companion chat messages.
pub struct SendChatMessageHandler {
    provider: Arc<dyn ChatProvider>,
}

impl SendChatMessageHandler {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<String, DomainError> {
        if cmd.transcript.is_empty() {
            return Err(DomainError::invalid_input("Transcript cannot be empty"));
        }

        self.provider
            .generate_reply(&cmd.transcript)
            .await
            .map_err(|e| match e {
                ChatError::AuthenticationFailed => {
                    DomainError::new(ErrorCode::AiProviderError, "Chat provider rejected credentials")
                }
                other => DomainError::new(ErrorCode::AiProviderError, other.to_string()),
            })
    }
}
