use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::blog::models::BlogSummary;
use crate::domain::review::models::Review;
use crate::inbound::http::handlers::blogs::AuthorData;

pub mod create_review;
pub mod delete_review;
pub mod get_review;
pub mod list_reviews;

pub use create_review::create_review;
pub use delete_review::delete_review;
pub use get_review::get_review;
pub use list_reviews::list_reviews;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewData {
    pub id: String,
    pub body: String,
    pub rating: i32,
    pub author: AuthorData,
    pub blog: BlogRefData,
    pub created_at: DateTime<Utc>,
}

impl From<&Review> for ReviewData {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.to_string(),
            body: review.body.clone(),
            rating: review.rating.value(),
            author: AuthorData::from(&review.author),
            blog: BlogRefData::from(&review.blog),
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogRefData {
    pub id: String,
    pub slug: String,
    pub title: String,
}

impl From<&BlogSummary> for BlogRefData {
    fn from(blog: &BlogSummary) -> Self {
        Self {
            id: blog.id.to_string(),
            slug: blog.slug.clone(),
            title: blog.title.clone(),
        }
    }
}
