use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::blog::models::BlogSummary;
use crate::domain::review::errors::RatingError;
use crate::domain::review::errors::ReviewIdError;
use crate::domain::user::models::UserSummary;

/// Reader review attached to a blog post.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub body: String,
    pub rating: Rating,
    pub author: UserSummary,
    pub blog: BlogSummary,
    pub created_at: DateTime<Utc>,
}

/// Review unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a review ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ReviewIdError> {
        Uuid::parse_str(s)
            .map(ReviewId)
            .map_err(|e| ReviewIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Star rating value type, constrained to 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(i32);

impl Rating {
    const MIN: i32 = 1;
    const MAX: i32 = 5;

    /// Create a validated rating.
    ///
    /// # Errors
    /// * `OutOfRange` - Value outside 1..=5
    pub fn new(value: i32) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            })
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Command to attach a review to a blog post.
#[derive(Debug)]
pub struct CreateReviewCommand {
    pub body: String,
    pub rating: Rating,
    pub author: UserSummary,
}
