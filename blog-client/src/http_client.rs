use crate::error::BlogClientError;
use crate::models::{CreatePostRequest, ErrorResponse, HealthStatus, Post};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Typed wrapper over the three posts operations and the health check.
#[derive(Debug, Clone)]
pub struct BlogClient {
    client: Client,
    base_url: String,
}

impl BlogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("Making {} request to {}", method, path);
        self.client.request(method, self.url(path))
    }

    /// `/api/posts/{id}` with the id sent as a single encoded path segment.
    fn post_url(&self, id: &str) -> Result<Url, BlogClientError> {
        let mut url = Url::parse(&self.url("/api/posts"))
            .map_err(|e| BlogClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| BlogClientError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        let response = self.request(Method::GET, "/api/posts").send().await?;
        Self::handle_response(response).await
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, BlogClientError> {
        let url = self.post_url(id)?;
        tracing::debug!("Making GET request to {}", url.path());
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    pub async fn create_post(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Post, BlogClientError> {
        let request = CreatePostRequest {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        };

        let response = self
            .request(Method::POST, "/api/posts")
            .json(&request)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn health(&self) -> Result<HealthStatus, BlogClientError> {
        let response = self.request(Method::GET, "/health").send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BlogClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await?;
        tracing::warn!("API error: HTTP {}: {}", status, body);
        Err(status_error(status, &body))
    }
}

fn status_error(status: StatusCode, body: &str) -> BlogClientError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::NOT_FOUND => BlogClientError::NotFound,
        StatusCode::BAD_REQUEST => BlogClientError::InvalidRequest(message),
        StatusCode::INTERNAL_SERVER_ERROR => BlogClientError::ServerError(message),
        _ => BlogClientError::UnexpectedStatus {
            status: status.as_u16(),
            body: message,
        },
    }
}
