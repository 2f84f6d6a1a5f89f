use async_trait::async_trait;

use crate::domain::blog::models::Slug;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::user::models::UserId;

/// Port for review domain service operations.
#[async_trait]
pub trait ReviewServicePort: Send + Sync + 'static {
    /// List every review.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_reviews(&self) -> Result<Vec<Review>, ReviewError>;

    /// Retrieve one review by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Review does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_review(&self, id: &ReviewId) -> Result<Review, ReviewError>;

    /// Attach a review to the blog with the given slug.
    ///
    /// # Errors
    /// * `BlogNotFound` - No blog with this slug
    /// * `DatabaseError` - Database operation failed
    async fn add_review_to_blog(
        &self,
        blog_slug: &Slug,
        command: CreateReviewCommand,
    ) -> Result<Review, ReviewError>;

    /// Remove a review on behalf of the requesting user.
    ///
    /// # Errors
    /// * `NotFound` - Review does not exist
    /// * `NotReviewAuthor` - Requester did not write the review
    /// * `DatabaseError` - Database operation failed
    async fn delete_review(&self, id: &ReviewId, requester: &UserId) -> Result<(), ReviewError>;
}

/// Persistence operations for the review aggregate.
///
/// Read operations return reviews with author and blog references joined in.
#[async_trait]
pub trait ReviewRepository: Send + Sync + 'static {
    /// Persist a new review.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, review: Review) -> Result<Review, ReviewError>;

    /// Retrieve a review by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewError>;

    /// Retrieve all reviews, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Review>, ReviewError>;

    /// Remove a review.
    ///
    /// # Errors
    /// * `NotFound` - Review does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &ReviewId) -> Result<(), ReviewError>;
}
