use thiserror::Error;

/// Error for Slug validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("Slug cannot be empty")]
    Empty,

    #[error("Slug too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Slug contains invalid characters (only lowercase alphanumeric and hyphen allowed)")]
    InvalidCharacters,
}

/// Top-level error for all blog-related operations
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    #[error("Invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("Blog not found: {0}")]
    NotFound(String),

    #[error("Blog with this slug already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for BlogError {
    fn from(err: anyhow::Error) -> Self {
        BlogError::Unknown(err.to_string())
    }
}
