use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::blog::errors::SlugError;
use crate::domain::user::models::UserSummary;

/// Published blog post.
#[derive(Debug, Clone)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub description: String,
    pub slug: Slug,
    pub publish_date: NaiveDate,
    pub author: UserSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Blog unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(pub Uuid);

impl BlogId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// URL-safe blog identifier used in routes.
///
/// Lowercase alphanumeric and hyphen, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    const MAX_LENGTH: usize = 100;

    /// Create a new valid slug.
    ///
    /// # Errors
    /// * `Empty` - Slug is the empty string
    /// * `TooLong` - Slug longer than 100 characters
    /// * `InvalidCharacters` - Anything outside lowercase alphanumeric and hyphen
    pub fn new(slug: String) -> Result<Self, SlugError> {
        if slug.is_empty() {
            return Err(SlugError::Empty);
        }
        if slug.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
                actual: slug.len(),
            });
        }
        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SlugError::InvalidCharacters);
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Blog reference embedded in entities attached to a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogSummary {
    pub id: BlogId,
    pub slug: String,
    pub title: String,
}

impl From<&Blog> for BlogSummary {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id,
            slug: blog.slug.as_str().to_string(),
            title: blog.title.clone(),
        }
    }
}

/// Command to publish a new blog post.
#[derive(Debug)]
pub struct CreateBlogCommand {
    pub title: String,
    pub description: String,
    pub slug: Slug,
    pub publish_date: NaiveDate,
    pub author: UserSummary,
}

/// Command to revise an existing blog post.
#[derive(Debug)]
pub struct UpdateBlogCommand {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_accepts_kebab_case() {
        let slug = Slug::new("my-first-post-2024".to_string()).unwrap();
        assert_eq!(slug.as_str(), "my-first-post-2024");
    }

    #[test]
    fn test_slug_rejects_invalid_input() {
        assert!(matches!(Slug::new(String::new()), Err(SlugError::Empty)));
        assert!(matches!(
            Slug::new("Has Spaces".to_string()),
            Err(SlugError::InvalidCharacters)
        ));
        assert!(matches!(
            Slug::new("UPPERCASE".to_string()),
            Err(SlugError::InvalidCharacters)
        ));
        assert!(matches!(
            Slug::new("a".repeat(101)),
            Err(SlugError::TooLong { .. })
        ));
    }
}
