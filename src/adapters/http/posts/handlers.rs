//! HTTP handlers for post endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    CreatePostCommand, CreatePostHandler, GetPostHandler, GetPostQuery, ListPostsHandler,
    ListPostsQuery,
};
use crate::domain::foundation::PostId;

use super::dto::{CreatePostRequest, PostResponse};

/// Handler state for the posts router.
#[derive(Clone)]
pub struct PostHandlers {
    create_handler: Arc<CreatePostHandler>,
    get_handler: Arc<GetPostHandler>,
    list_handler: Arc<ListPostsHandler>,
}

impl PostHandlers {
    pub fn new(
        create_handler: Arc<CreatePostHandler>,
        get_handler: Arc<GetPostHandler>,
        list_handler: Arc<ListPostsHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
        }
    }
}

/// POST /api/posts - Publish a post (moderated)
pub async fn create_post(
    State(handlers): State<PostHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreatePostRequest>,
) -> Response {
    let cmd = CreatePostCommand {
        author: user,
        content: req.content,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "id": result.post_id.to_string(),
                "message": "Post published"
            })),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/posts - List the caller's posts, newest first
pub async fn list_posts(
    State(handlers): State<PostHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListPostsQuery { author: user };

    match handlers.list_handler.handle(query).await {
        Ok(posts) => {
            let body: Vec<PostResponse> = posts.iter().map(PostResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/posts/:id - Fetch a single post
pub async fn get_post(
    State(handlers): State<PostHandlers>,
    Path(id): Path<String>,
) -> Response {
    let post_id = match id.parse::<PostId>() {
        Ok(post_id) => post_id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Post id must be a UUID")),
            )
                .into_response()
        }
    };

    match handlers.get_handler.handle(GetPostQuery { post_id }).await {
        Ok(Some(post)) => (StatusCode::OK, Json(PostResponse::from(&post))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Post", &id)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}
