use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;

use crate::domain::blog::models::Blog;
use crate::domain::user::models::UserSummary;

pub mod create_blog;
pub mod delete_blog;
pub mod get_blog;
pub mod list_blogs;
pub mod update_blog;
pub mod user_blogs;

pub use create_blog::create_blog;
pub use delete_blog::delete_blog;
pub use get_blog::get_blog;
pub use list_blogs::list_blogs;
pub use update_blog::update_blog;
pub use user_blogs::user_blogs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub publish_date: NaiveDate,
    pub author: AuthorData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Blog> for BlogData {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            title: blog.title.clone(),
            description: blog.description.clone(),
            slug: blog.slug.as_str().to_string(),
            publish_date: blog.publish_date,
            author: AuthorData::from(&blog.author),
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorData {
    pub id: String,
    pub username: String,
}

impl From<&UserSummary> for AuthorData {
    fn from(author: &UserSummary) -> Self {
        Self {
            id: author.id.to_string(),
            username: author.username.clone(),
        }
    }
}
