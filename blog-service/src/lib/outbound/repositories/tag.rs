use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::blog::models::BlogId;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::Tag;
use crate::domain::tag::models::TagId;
use crate::domain::tag::ports::TagRepository;

pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TagRow {
    id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag {
            id: TagId(row.id),
            title: row.title,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn conflict_error(e: sqlx::Error, title: &str) -> TagError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("tags_title_key") {
            return TagError::AlreadyExists(title.to_string());
        }
    }
    TagError::DatabaseError(e.to_string())
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn create(&self, tag: Tag) -> Result<Tag, TagError> {
        sqlx::query(
            r#"
            INSERT INTO tags (id, title, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(tag.id.0)
        .bind(&tag.title)
        .bind(tag.created_at)
        .bind(tag.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_error(e, &tag.title))?;

        Ok(tag)
    }

    async fn find_by_id(&self, id: &TagId) -> Result<Option<Tag>, TagError> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, title, created_at, updated_at FROM tags WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TagError::DatabaseError(e.to_string()))?;

        Ok(row.map(Tag::from))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, TagError> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT id, title, created_at, updated_at FROM tags WHERE title = $1",
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TagError::DatabaseError(e.to_string()))?;

        Ok(row.map(Tag::from))
    }

    async fn list_all(&self) -> Result<Vec<Tag>, TagError> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, title, created_at, updated_at FROM tags ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TagError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn update(&self, tag: Tag) -> Result<Tag, TagError> {
        let result = sqlx::query(
            r#"
            UPDATE tags
            SET title = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(tag.id.0)
        .bind(&tag.title)
        .bind(tag.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_error(e, &tag.title))?;

        if result.rows_affected() == 0 {
            return Err(TagError::NotFound(tag.id.to_string()));
        }

        Ok(tag)
    }

    async fn delete(&self, id: &TagId) -> Result<(), TagError> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| TagError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TagError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn link_to_blog(&self, tag_id: &TagId, blog_id: &BlogId) -> Result<(), TagError> {
        sqlx::query(
            r#"
            INSERT INTO blog_tags (blog_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(blog_id.0)
        .bind(tag_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| TagError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
