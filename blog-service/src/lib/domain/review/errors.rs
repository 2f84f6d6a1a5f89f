use thiserror::Error;

/// Error for ReviewId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Rating validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("Rating out of range: must be between {min} and {max}, got {actual}")]
    OutOfRange { min: i32, max: i32, actual: i32 },
}

/// Top-level error for all review-related operations
#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    #[error("Invalid review ID: {0}")]
    InvalidReviewId(#[from] ReviewIdError),

    #[error("Invalid rating: {0}")]
    InvalidRating(#[from] RatingError),

    #[error("Review not found: {0}")]
    NotFound(String),

    #[error("Blog not found: {0}")]
    BlogNotFound(String),

    #[error("Cannot delete this review")]
    NotReviewAuthor,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
