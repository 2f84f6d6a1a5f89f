use async_trait::async_trait;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::CreateBlogCommand;
use crate::domain::blog::models::Slug;
use crate::domain::blog::models::UpdateBlogCommand;
use crate::domain::user::models::UserId;

/// Port for blog domain service operations.
#[async_trait]
pub trait BlogServicePort: Send + Sync + 'static {
    /// List every published blog post.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_blogs(&self) -> Result<Vec<Blog>, BlogError>;

    /// List the posts written by one author.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_blogs_by_author(&self, author_id: &UserId) -> Result<Vec<Blog>, BlogError>;

    /// Retrieve one post by its slug.
    ///
    /// # Errors
    /// * `NotFound` - No post with this slug
    /// * `DatabaseError` - Database operation failed
    async fn get_blog_by_slug(&self, slug: &Slug) -> Result<Blog, BlogError>;

    /// Publish a new post.
    ///
    /// # Errors
    /// * `AlreadyExists` - Slug is taken
    /// * `DatabaseError` - Database operation failed
    async fn create_blog(&self, command: CreateBlogCommand) -> Result<Blog, BlogError>;

    /// Revise title and description of an existing post.
    ///
    /// # Errors
    /// * `NotFound` - No post with this slug
    /// * `DatabaseError` - Database operation failed
    async fn update_blog(&self, slug: &Slug, command: UpdateBlogCommand)
        -> Result<Blog, BlogError>;

    /// Remove a post.
    ///
    /// # Errors
    /// * `NotFound` - No post with this slug
    /// * `DatabaseError` - Database operation failed
    async fn delete_blog(&self, slug: &Slug) -> Result<(), BlogError>;
}

/// Persistence operations for the blog aggregate.
///
/// Read operations return posts with the author reference already joined in.
#[async_trait]
pub trait BlogRepository: Send + Sync + 'static {
    /// Persist a new post.
    ///
    /// # Errors
    /// * `AlreadyExists` - Slug unique constraint hit
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError>;

    /// Retrieve a post by slug.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Blog>, BlogError>;

    /// Retrieve all posts, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Blog>, BlogError>;

    /// Retrieve all posts by one author, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Blog>, BlogError>;

    /// Update an existing post.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, blog: Blog) -> Result<Blog, BlogError>;

    /// Remove a post.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &BlogId) -> Result<(), BlogError>;
}
