use thiserror::Error;

/// Error for TagId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all tag-related operations
#[derive(Debug, Clone, Error)]
pub enum TagError {
    #[error("Invalid tag ID: {0}")]
    InvalidTagId(#[from] TagIdError),

    #[error("Tag not found: {0}")]
    NotFound(String),

    #[error("Tag with this title already exists: {0}")]
    AlreadyExists(String),

    #[error("Blog not found: {0}")]
    BlogNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
