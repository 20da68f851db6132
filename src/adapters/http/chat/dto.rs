//! HTTP DTOs for companion chat endpoints.

use serde::{Deserialize, Serialize};

use crate::ports::{ChatMessage, ChatRole};

/// One transcript message as sent by clients.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessageDto {
    pub role: ChatRole,
    pub content: String,
}

impl From<ChatMessageDto> for ChatMessage {
    fn from(dto: ChatMessageDto) -> Self {
        Self {
            role: dto.role,
            content: dto.content,
        }
    }
}

/// Request carrying the conversation so far, oldest first.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessageDto>,
}

/// The companion's reply.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub message: String,
}
