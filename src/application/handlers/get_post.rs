//! GetPost - Query handler for fetching a single post.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PostId};
use crate::domain::social::Post;
use crate::ports::PostRepository;

/// Query for one post by id.
#[derive(Debug, Clone)]
pub struct GetPostQuery {
    pub post_id: PostId,
}

/// Handler for single-post lookups.
pub struct GetPostHandler {
    repository: Arc<dyn PostRepository>,
}

impl GetPostHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPostQuery) -> Result<Option<Post>, DomainError> {
        self.repository.find_by_id(query.post_id).await
    }
}
