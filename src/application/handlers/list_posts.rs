//! ListPosts - Query handler for a user's feed of own posts.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::social::Post;
use crate::ports::PostRepository;

/// Query for the author's posts, newest first.
#[derive(Debug, Clone)]
pub struct ListPostsQuery {
    pub author: UserId,
}

/// Handler for listing posts.
pub struct ListPostsHandler {
    repository: Arc<dyn PostRepository>,
}

impl ListPostsHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListPostsQuery) -> Result<Vec<Post>, DomainError> {
        self.repository.list_by_author(&query.author).await
    }
}
