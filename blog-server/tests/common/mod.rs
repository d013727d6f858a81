#![allow(dead_code)]

use async_trait::async_trait;
use blog_server::data::PostRepository;
use blog_server::domain::{DomainError, NewPost, Post};
use chrono::Utc;
use std::sync::Mutex;

/// Keeps posts in memory and resolves ids the way Postgres casts text to
/// BIGINT: surrounding whitespace is ignored, anything else non-numeric is
/// a storage error.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, DomainError> {
        let id: i64 = id.trim().parse().map_err(|_| {
            DomainError::DatabaseError(format!("invalid input syntax for type bigint: {id:?}"))
        })?;

        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|post| post.id == id).cloned())
    }

    async fn create(&self, post: &NewPost) -> Result<Post, DomainError> {
        let mut posts = self.posts.lock().unwrap();
        let now = Utc::now();
        let post = Post {
            id: posts.len() as i64 + 1,
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            created_at: now,
            updated_at: now,
        };
        posts.push(post.clone());
        Ok(post)
    }
}

/// Every call fails the way an unreachable database does.
pub struct FailingPostRepository;

#[async_trait]
impl PostRepository for FailingPostRepository {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Post>, DomainError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _post: &NewPost) -> Result<Post, DomainError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

macro_rules! test_app {
    ($repo:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .wrap(blog_server::presentation::configure_cors())
                .app_data(actix_web::web::Data::new(
                    blog_server::application::BlogService::new($repo),
                ))
                .configure(blog_server::presentation::configure_routes),
        )
        .await
    };
}
