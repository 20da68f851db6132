//! HTTP adapter for post endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreatePostRequest, PostResponse};
pub use handlers::PostHandlers;
pub use routes::post_routes;
