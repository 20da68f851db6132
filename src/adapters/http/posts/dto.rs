//! HTTP DTOs for post endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::social::Post;

/// Request to publish a post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}

/// A post as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: String,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id().to_string(),
            author: post.author().to_string(),
            content: post.content().to_string(),
            created_at: post.created_at().to_string(),
        }
    }
}
