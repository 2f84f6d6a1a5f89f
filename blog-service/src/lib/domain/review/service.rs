use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::blog::models::BlogSummary;
use crate::domain::blog::models::Slug;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::review::ports::ReviewServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for review operations.
pub struct ReviewService<RR, BR>
where
    RR: ReviewRepository,
    BR: BlogRepository,
{
    repository: Arc<RR>,
    blog_repository: Arc<BR>,
}

impl<RR, BR> ReviewService<RR, BR>
where
    RR: ReviewRepository,
    BR: BlogRepository,
{
    pub fn new(repository: Arc<RR>, blog_repository: Arc<BR>) -> Self {
        Self {
            repository,
            blog_repository,
        }
    }
}

#[async_trait]
impl<RR, BR> ReviewServicePort for ReviewService<RR, BR>
where
    RR: ReviewRepository,
    BR: BlogRepository,
{
    async fn list_reviews(&self) -> Result<Vec<Review>, ReviewError> {
        self.repository.list_all().await
    }

    async fn get_review(&self, id: &ReviewId) -> Result<Review, ReviewError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ReviewError::NotFound(id.to_string()))
    }

    async fn add_review_to_blog(
        &self,
        blog_slug: &Slug,
        command: CreateReviewCommand,
    ) -> Result<Review, ReviewError> {
        let blog = self
            .blog_repository
            .find_by_slug(blog_slug)
            .await
            .map_err(|e| ReviewError::DatabaseError(e.to_string()))?
            .ok_or(ReviewError::BlogNotFound(blog_slug.to_string()))?;

        let review = Review {
            id: ReviewId::new(),
            body: command.body,
            rating: command.rating,
            author: command.author,
            blog: BlogSummary::from(&blog),
            created_at: Utc::now(),
        };

        self.repository.create(review).await
    }

    async fn delete_review(&self, id: &ReviewId, requester: &UserId) -> Result<(), ReviewError> {
        let review = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ReviewError::NotFound(id.to_string()))?;

        if review.author.id != *requester {
            return Err(ReviewError::NotReviewAuthor);
        }

        self.repository.delete(id).await
    }
}
