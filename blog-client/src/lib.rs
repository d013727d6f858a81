//! HTTP gateway to the blog posts API.
//!
//! ```no_run
//! # async fn demo() -> Result<(), blog_client::BlogClientError> {
//! let client = blog_client::BlogClient::new("http://localhost:5000");
//! let post = client.create_post("Hello", "First post", "Admin").await?;
//! let same = client.get_post(&post.id.to_string()).await?;
//! assert_eq!(post, same);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http_client;
pub mod models;

pub use error::BlogClientError;
pub use http_client::BlogClient;
pub use models::{HealthStatus, Post};
