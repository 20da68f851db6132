//! HTTP routes for post endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_post, get_post, list_posts, PostHandlers};

/// Creates the posts router with all endpoints.
pub fn post_routes(handlers: PostHandlers) -> Router {
    Router::new()
        .route("/", post(create_post))
        .route("/", get(list_posts))
        .route("/:id", get(get_post))
        .with_state(handlers)
}
