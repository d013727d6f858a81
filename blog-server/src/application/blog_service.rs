use crate::data::post_repository::PostRepository;
use crate::domain::post::CreatePostRequest;
use crate::domain::{DomainError, Post};
use std::sync::Arc;

pub struct BlogService {
    post_repo: Arc<dyn PostRepository>,
}

impl BlogService {
    pub fn new(post_repo: Arc<dyn PostRepository>) -> Self {
        Self { post_repo }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.post_repo.list().await
    }

    /// `id` is handed to the repository untouched; numeric parsing is left
    /// to the store.
    pub async fn get_post(&self, id: &str) -> Result<Post, DomainError> {
        self.post_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound)
    }

    pub async fn create_post(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let new_post = req.validate()?;

        let post = self.post_repo.create(&new_post).await?;

        tracing::info!("Post created: id={}, author={}", post.id, post.author);

        Ok(post)
    }
}
