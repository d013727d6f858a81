use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/posts`.
///
/// Fields are kept as raw JSON so that presence and truthiness can be
/// judged before anything is coerced to text.
#[derive(Debug, Default)]
pub struct CreatePostRequest {
    pub title: Option<Value>,
    pub content: Option<Value>,
    pub author: Option<Value>,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl CreatePostRequest {
    /// Takes the three fields out of a JSON object. Other keys are ignored.
    pub fn from_object(mut fields: Map<String, Value>) -> Self {
        Self {
            title: fields.remove("title"),
            content: fields.remove("content"),
            author: fields.remove("author"),
        }
    }

    pub fn validate(&self) -> Result<NewPost, DomainError> {
        match (
            required_text(self.title.as_ref()),
            required_text(self.content.as_ref()),
            required_text(self.author.as_ref()),
        ) {
            (Some(title), Some(content), Some(author)) => Ok(NewPost {
                title,
                content,
                author,
            }),
            _ => Err(DomainError::fields_required()),
        }
    }
}

/// Absent, null, empty, `false` and zero count as missing. Whitespace is
/// not trimmed.
fn required_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
