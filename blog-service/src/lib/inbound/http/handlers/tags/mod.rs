use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::tag::models::Tag;

pub mod add_tags_to_blog;
pub mod create_tag;
pub mod delete_tag;
pub mod get_tag;
pub mod list_tags;
pub mod update_tag;

pub use add_tags_to_blog::add_tags_to_blog;
pub use create_tag::create_tag;
pub use delete_tag::delete_tag;
pub use get_tag::get_tag;
pub use list_tags::list_tags;
pub use update_tag::update_tag;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagData {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Tag> for TagData {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            title: tag.title.clone(),
            created_at: tag.created_at,
        }
    }
}
