//! Post aggregate - user content gated by moderation before persistence.

use crate::domain::foundation::{PostId, Timestamp, UserId, ValidationError};

/// Maximum post length in characters.
pub const MAX_POST_LENGTH: usize = 5_000;

/// A post accepted for publication.
///
/// Construction validates shape only (non-empty, within length limits);
/// community-guideline acceptance is the moderation filter's decision and
/// happens in the create-post flow before a `Post` is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    author: UserId,
    content: String,
    created_at: Timestamp,
}

impl Post {
    /// Creates a new post with validated content.
    pub fn new(author: UserId, content: impl Into<String>) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        let length = content.chars().count();
        if length > MAX_POST_LENGTH {
            return Err(ValidationError::out_of_range(
                "content",
                1,
                MAX_POST_LENGTH as i32,
                length as i32,
            ));
        }
        Ok(Self {
            id: PostId::new(),
            author,
            content,
            created_at: Timestamp::now(),
        })
    }

    /// Rehydrates a post from storage.
    pub fn from_parts(id: PostId, author: UserId, content: String, created_at: Timestamp) -> Self {
        Self {
            id,
            author,
            content,
            created_at,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn author(&self) -> &UserId {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
