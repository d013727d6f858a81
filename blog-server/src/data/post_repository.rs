use crate::domain::{DomainError, NewPost, Post};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

pub const LIST_POSTS_SQL: &str = r#"
    SELECT id, title, content, author, created_at, updated_at
    FROM posts
    ORDER BY created_at DESC, id DESC
"#;

// The key is bound as text and converted by Postgres, so the store decides
// what identifies a row.
pub const FIND_POST_SQL: &str = r#"
    SELECT id, title, content, author, created_at, updated_at
    FROM posts
    WHERE id = CAST($1 AS BIGINT)
"#;

pub const CREATE_POST_SQL: &str = r#"
    INSERT INTO posts (title, content, author)
    VALUES ($1, $2, $3)
    RETURNING id, title, content, author, created_at, updated_at
"#;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Post>, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, DomainError>;
    async fn create(&self, post: &NewPost) -> Result<Post, DomainError>;
}

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn post_from_row(row: &PgRow) -> Result<Post, DomainError> {
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        author: row.try_get("author")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query(LIST_POSTS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Error fetching posts: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        rows.iter().map(post_from_row).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query(FIND_POST_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Error fetching post {:?}: {}", id, e);
                DomainError::DatabaseError(e.to_string())
            })?;

        row.as_ref().map(post_from_row).transpose()
    }

    async fn create(&self, post: &NewPost) -> Result<Post, DomainError> {
        let row = sqlx::query(CREATE_POST_SQL)
            .bind(&post.title)
            .bind(&post.content)
            .bind(&post.author)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Error creating post: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        post_from_row(&row)
    }
}
