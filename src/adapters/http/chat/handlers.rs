//! HTTP handlers for companion chat endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::{SendChatMessageCommand, SendChatMessageHandler};
use crate::ports::ChatMessage;

use super::dto::{ChatRequest, ChatResponse};

/// Handler state for the chat router.
#[derive(Clone)]
pub struct ChatHandlers {
    send_handler: Arc<SendChatMessageHandler>,
}

impl ChatHandlers {
    pub fn new(send_handler: Arc<SendChatMessageHandler>) -> Self {
        Self { send_handler }
    }
}

/// POST /api/chat - Generate the next companion reply
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<ChatRequest>,
) -> Response {
    let cmd = SendChatMessageCommand {
        transcript: req.messages.into_iter().map(ChatMessage::from).collect(),
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(reply) => (StatusCode::OK, Json(ChatResponse { message: reply })).into_response(),
        Err(e) => domain_error_response(e),
    }
}
