use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::tag::errors::TagIdError;

/// Label attachable to any number of blog posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Tag unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub Uuid);

impl TagId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a tag ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TagIdError> {
        Uuid::parse_str(s)
            .map(TagId)
            .map_err(|e| TagIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TagId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create or rename a tag.
#[derive(Debug)]
pub struct UpsertTagCommand {
    pub title: String,
}

/// Command to attach a batch of tag titles to a blog post.
#[derive(Debug)]
pub struct AddTagsCommand {
    pub titles: Vec<String>,
}
