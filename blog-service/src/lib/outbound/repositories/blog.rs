use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::Slug;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserSummary;

pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Every read joins the author so handlers never do a second lookup.
const BLOG_SELECT: &str = r#"
    SELECT b.id, b.title, b.description, b.slug, b.publish_date,
           b.created_at, b.updated_at,
           u.id AS author_id, u.username AS author_username
    FROM blogs b
    JOIN users u ON u.id = b.author_id
"#;

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: Uuid,
    title: String,
    description: String,
    slug: String,
    publish_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_id: Uuid,
    author_username: String,
}

impl TryFrom<BlogRow> for Blog {
    type Error = BlogError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        Ok(Blog {
            id: BlogId(row.id),
            title: row.title,
            description: row.description,
            slug: Slug::new(row.slug)?,
            publish_date: row.publish_date,
            author: UserSummary {
                id: UserId(row.author_id),
                username: row.author_username,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn conflict_error(e: sqlx::Error, slug: &Slug) -> BlogError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("blogs_slug_key") {
            return BlogError::AlreadyExists(slug.to_string());
        }
    }
    BlogError::DatabaseError(e.to_string())
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError> {
        sqlx::query(
            r#"
            INSERT INTO blogs (id, title, description, slug, publish_date, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(blog.id.0)
        .bind(&blog.title)
        .bind(&blog.description)
        .bind(blog.slug.as_str())
        .bind(blog.publish_date)
        .bind(blog.author.id.0)
        .bind(blog.created_at)
        .bind(blog.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_error(e, &blog.slug))?;

        Ok(blog)
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Blog>, BlogError> {
        let row = sqlx::query_as::<_, BlogRow>(&format!("{BLOG_SELECT} WHERE b.slug = $1"))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        row.map(Blog::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Blog>, BlogError> {
        let rows =
            sqlx::query_as::<_, BlogRow>(&format!("{BLOG_SELECT} ORDER BY b.created_at DESC"))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Blog::try_from).collect()
    }

    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Blog>, BlogError> {
        let rows = sqlx::query_as::<_, BlogRow>(&format!(
            "{BLOG_SELECT} WHERE b.author_id = $1 ORDER BY b.created_at DESC"
        ))
        .bind(author_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Blog::try_from).collect()
    }

    async fn update(&self, blog: Blog) -> Result<Blog, BlogError> {
        let result = sqlx::query(
            r#"
            UPDATE blogs
            SET title = $2, description = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(blog.id.0)
        .bind(&blog.title)
        .bind(&blog.description)
        .bind(blog.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound(blog.slug.to_string()));
        }

        Ok(blog)
    }

    async fn delete(&self, id: &BlogId) -> Result<(), BlogError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
