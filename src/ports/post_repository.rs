//! Post repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PostId, UserId};
use crate::domain::social::Post;

/// Persistence port for posts.
///
/// The moderation gate runs before `create` is ever called: a rejected post
/// never reaches this port.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persists a new post.
    async fn create(&self, post: &Post) -> Result<(), DomainError>;

    /// Finds a post by id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, DomainError>;

    /// Lists a user's posts, newest first.
    async fn list_by_author(&self, author: &UserId) -> Result<Vec<Post>, DomainError>;
}
