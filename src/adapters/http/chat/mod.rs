//! HTTP adapter for companion chat endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatMessageDto, ChatRequest, ChatResponse};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
