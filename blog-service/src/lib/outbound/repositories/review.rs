use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::BlogSummary;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Rating;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserSummary;

pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Reads join both the reviewer and the reviewed blog.
const REVIEW_SELECT: &str = r#"
    SELECT r.id, r.body, r.rating, r.created_at,
           u.id AS author_id, u.username AS author_username,
           b.id AS blog_id, b.slug AS blog_slug, b.title AS blog_title
    FROM reviews r
    JOIN users u ON u.id = r.author_id
    JOIN blogs b ON b.id = r.blog_id
"#;

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    body: String,
    rating: i32,
    created_at: DateTime<Utc>,
    author_id: Uuid,
    author_username: String,
    blog_id: Uuid,
    blog_slug: String,
    blog_title: String,
}

impl TryFrom<ReviewRow> for Review {
    type Error = ReviewError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        Ok(Review {
            id: ReviewId(row.id),
            body: row.body,
            rating: Rating::new(row.rating)?,
            author: UserSummary {
                id: UserId(row.author_id),
                username: row.author_username,
            },
            blog: BlogSummary {
                id: BlogId(row.blog_id),
                slug: row.blog_slug,
                title: row.blog_title,
            },
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, ReviewError> {
        sqlx::query(
            r#"
            INSERT INTO reviews (id, body, rating, author_id, blog_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(review.id.0)
        .bind(&review.body)
        .bind(review.rating.value())
        .bind(review.author.id.0)
        .bind(review.blog.id.0)
        .bind(review.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        Ok(review)
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewError> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!("{REVIEW_SELECT} WHERE r.id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        row.map(Review::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Review>, ReviewError> {
        let rows =
            sqlx::query_as::<_, ReviewRow>(&format!("{REVIEW_SELECT} ORDER BY r.created_at DESC"))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Review::try_from).collect()
    }

    async fn delete(&self, id: &ReviewId) -> Result<(), ReviewError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
