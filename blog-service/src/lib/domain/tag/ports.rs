use async_trait::async_trait;

use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::Slug;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::AddTagsCommand;
use crate::domain::tag::models::Tag;
use crate::domain::tag::models::TagId;
use crate::domain::tag::models::UpsertTagCommand;

/// Port for tag domain service operations.
#[async_trait]
pub trait TagServicePort: Send + Sync + 'static {
    /// List every tag.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_tags(&self) -> Result<Vec<Tag>, TagError>;

    /// Retrieve one tag by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Tag does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_tag(&self, id: &TagId) -> Result<Tag, TagError>;

    /// Create a new tag.
    ///
    /// # Errors
    /// * `AlreadyExists` - Title is taken
    /// * `DatabaseError` - Database operation failed
    async fn create_tag(&self, command: UpsertTagCommand) -> Result<Tag, TagError>;

    /// Attach a batch of tag titles to a blog, creating missing tags.
    ///
    /// Returns the attached tags.
    ///
    /// # Errors
    /// * `BlogNotFound` - No blog with this slug
    /// * `DatabaseError` - Database operation failed
    async fn add_tags_to_blog(
        &self,
        blog_slug: &Slug,
        command: AddTagsCommand,
    ) -> Result<Vec<Tag>, TagError>;

    /// Rename an existing tag.
    ///
    /// # Errors
    /// * `NotFound` - Tag does not exist
    /// * `AlreadyExists` - New title is taken
    /// * `DatabaseError` - Database operation failed
    async fn update_tag(&self, id: &TagId, command: UpsertTagCommand) -> Result<Tag, TagError>;

    /// Remove a tag.
    ///
    /// # Errors
    /// * `NotFound` - Tag does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_tag(&self, id: &TagId) -> Result<(), TagError>;
}

/// Persistence operations for the tag aggregate.
#[async_trait]
pub trait TagRepository: Send + Sync + 'static {
    /// Persist a new tag.
    ///
    /// # Errors
    /// * `AlreadyExists` - Title unique constraint hit
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, tag: Tag) -> Result<Tag, TagError>;

    /// Retrieve a tag by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &TagId) -> Result<Option<Tag>, TagError>;

    /// Retrieve a tag by its unique title.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, TagError>;

    /// Retrieve all tags.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Tag>, TagError>;

    /// Update an existing tag.
    ///
    /// # Errors
    /// * `NotFound` - Tag does not exist
    /// * `AlreadyExists` - Title unique constraint hit
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, tag: Tag) -> Result<Tag, TagError>;

    /// Remove a tag.
    ///
    /// # Errors
    /// * `NotFound` - Tag does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &TagId) -> Result<(), TagError>;

    /// Associate a tag with a blog. Idempotent.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn link_to_blog(&self, tag_id: &TagId, blog_id: &BlogId) -> Result<(), TagError>;
}
