//! CreatePost - Command handler for publishing a moderated post.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, PostId, UserId};
use crate::domain::moderation::ModerationFilter;
use crate::domain::social::Post;
use crate::ports::PostRepository;

/// Command to create a post.
#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub author: UserId,
    pub content: String,
}

/// Result of successful post creation.
#[derive(Debug, Clone)]
pub struct CreatePostResult {
    pub post_id: PostId,
}

/// Handler for creating posts.
///
/// Runs the moderation filter before the repository write: on rejection
/// nothing is persisted and the moderation message is returned to the
/// caller as a validation error.
pub struct CreatePostHandler {
    repository: Arc<dyn PostRepository>,
    filter: ModerationFilter,
}

impl CreatePostHandler {
    pub fn new(repository: Arc<dyn PostRepository>, filter: ModerationFilter) -> Self {
        Self { repository, filter }
    }

    pub async fn handle(&self, cmd: CreatePostCommand) -> Result<CreatePostResult, DomainError> {
        // 1. Moderate before anything touches storage
        let moderation = self.filter.classify(&cmd.content);
        if !moderation.is_valid {
            tracing::info!(
                author = %cmd.author,
                matched_terms = ?moderation.matched_terms,
                "post rejected by moderation filter"
            );
            let message = moderation
                .message
                .unwrap_or_else(|| "Content rejected".to_string());
            return Err(DomainError::new(ErrorCode::ValidationFailed, message)
                .with_detail("matched_terms", moderation.matched_terms.join(", ")));
        }

        // 2. Build and persist the post
        let post = Post::new(cmd.author, cmd.content)?;
        let post_id = post.id();
        self.repository.create(&post).await?;

        Ok(CreatePostResult { post_id })
    }
}
