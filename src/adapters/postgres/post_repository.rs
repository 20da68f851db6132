//! PostgreSQL implementation of PostRepository.
//!
//! Provides persistent storage for posts using PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, PostId, Timestamp, UserId};
use crate::domain::social::Post;
use crate::ports::PostRepository;

/// PostgreSQL implementation of the PostRepository port.
///
/// Uses sqlx for type-safe database operations with connection pooling.
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a post.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    author_id: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let author = UserId::new(row.author_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid author_id: {}", e))
        })?;

        Ok(Post::from_parts(
            PostId::from_uuid(row.id),
            author,
            row.content,
            Timestamp::from_datetime(row.created_at),
        ))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: &Post) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(post.id().as_uuid())
        .bind(post.author().as_str())
        .bind(post.content())
        .bind(post.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to save post: {}", e))
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, DomainError> {
        let row: Option<PostRow> = sqlx::query_as(
            r#"
            SELECT id, author_id, content, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to load post: {}", e))
        })?;

        row.map(Post::try_from).transpose()
    }

    async fn list_by_author(&self, author: &UserId) -> Result<Vec<Post>, DomainError> {
        let rows: Vec<PostRow> = sqlx::query_as(
            r#"
            SELECT id, author_id, content, created_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(author.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list posts: {}", e))
        })?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
