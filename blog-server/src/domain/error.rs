use thiserror::Error;

pub const FIELDS_REQUIRED_MESSAGE: &str = "Title, content, and author are required";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found")]
    PostNotFound,

    #[error("{0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    pub fn fields_required() -> Self {
        Self::ValidationError(FIELDS_REQUIRED_MESSAGE.to_string())
    }

    pub fn to_status_code(&self) -> u16 {
        match self {
            Self::PostNotFound => 404,
            Self::ValidationError(_) => 400,
            Self::DatabaseError(_) => 500,
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::PostNotFound,
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}
