use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::CreateBlogCommand;
use crate::domain::blog::models::Slug;
use crate::domain::blog::models::UpdateBlogCommand;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::blog::ports::BlogServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for blog operations.
pub struct BlogService<BR>
where
    BR: BlogRepository,
{
    repository: Arc<BR>,
}

impl<BR> BlogService<BR>
where
    BR: BlogRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BlogServicePort for BlogService<BR>
where
    BR: BlogRepository,
{
    async fn list_blogs(&self) -> Result<Vec<Blog>, BlogError> {
        self.repository.list_all().await
    }

    async fn list_blogs_by_author(&self, author_id: &UserId) -> Result<Vec<Blog>, BlogError> {
        self.repository.list_by_author(author_id).await
    }

    async fn get_blog_by_slug(&self, slug: &Slug) -> Result<Blog, BlogError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or(BlogError::NotFound(slug.to_string()))
    }

    async fn create_blog(&self, command: CreateBlogCommand) -> Result<Blog, BlogError> {
        if self.repository.find_by_slug(&command.slug).await?.is_some() {
            return Err(BlogError::AlreadyExists(command.slug.to_string()));
        }

        let now = Utc::now();
        let blog = Blog {
            id: BlogId::new(),
            title: command.title,
            description: command.description,
            slug: command.slug,
            publish_date: command.publish_date,
            author: command.author,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(blog).await
    }

    async fn update_blog(
        &self,
        slug: &Slug,
        command: UpdateBlogCommand,
    ) -> Result<Blog, BlogError> {
        let mut blog = self
            .repository
            .find_by_slug(slug)
            .await?
            .ok_or(BlogError::NotFound(slug.to_string()))?;

        blog.title = command.title;
        blog.description = command.description;
        blog.updated_at = Utc::now();

        self.repository.update(blog).await
    }

    async fn delete_blog(&self, slug: &Slug) -> Result<(), BlogError> {
        let blog = self
            .repository
            .find_by_slug(slug)
            .await?
            .ok_or(BlogError::NotFound(slug.to_string()))?;

        self.repository.delete(&blog.id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::UserSummary;

    mock! {
        pub TestBlogRepository {}

        #[async_trait]
        impl BlogRepository for TestBlogRepository {
            async fn create(&self, blog: Blog) -> Result<Blog, BlogError>;
            async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Blog>, BlogError>;
            async fn list_all(&self) -> Result<Vec<Blog>, BlogError>;
            async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Blog>, BlogError>;
            async fn update(&self, blog: Blog) -> Result<Blog, BlogError>;
            async fn delete(&self, id: &BlogId) -> Result<(), BlogError>;
        }
    }

    fn author() -> UserSummary {
        UserSummary {
            id: UserId::new(),
            username: "alice".to_string(),
        }
    }

    fn existing_blog(slug: &str) -> Blog {
        let now = Utc::now();
        Blog {
            id: BlogId::new(),
            title: "A Post".to_string(),
            description: "Body".to_string(),
            slug: Slug::new(slug.to_string()).unwrap(),
            publish_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            author: author(),
            created_at: now,
            updated_at: now,
        }
    }

    fn create_command(slug: &str) -> CreateBlogCommand {
        CreateBlogCommand {
            title: "A Post".to_string(),
            description: "Body".to_string(),
            slug: Slug::new(slug.to_string()).unwrap(),
            publish_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            author: author(),
        }
    }

    #[tokio::test]
    async fn test_create_blog_success() {
        let mut repository = MockTestBlogRepository::new();

        repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|blog| blog.slug.as_str() == "a-post" && blog.title == "A Post")
            .times(1)
            .returning(Ok);

        let service = BlogService::new(Arc::new(repository));

        let blog = service.create_blog(create_command("a-post")).await.unwrap();
        assert_eq!(blog.slug.as_str(), "a-post");
    }

    #[tokio::test]
    async fn test_create_blog_duplicate_slug() {
        let mut repository = MockTestBlogRepository::new();

        repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(Some(existing_blog("a-post"))));
        repository.expect_create().times(0);

        let service = BlogService::new(Arc::new(repository));

        let result = service.create_blog(create_command("a-post")).await;
        assert!(matches!(result.unwrap_err(), BlogError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_get_blog_not_found() {
        let mut repository = MockTestBlogRepository::new();

        repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        let service = BlogService::new(Arc::new(repository));

        let slug = Slug::new("missing".to_string()).unwrap();
        let result = service.get_blog_by_slug(&slug).await;
        assert!(matches!(result.unwrap_err(), BlogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_blog_applies_changes() {
        let mut repository = MockTestBlogRepository::new();

        repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(Some(existing_blog("a-post"))));
        repository
            .expect_update()
            .withf(|blog| blog.title == "New Title" && blog.description == "New body")
            .times(1)
            .returning(Ok);

        let service = BlogService::new(Arc::new(repository));

        let slug = Slug::new("a-post".to_string()).unwrap();
        let command = UpdateBlogCommand {
            title: "New Title".to_string(),
            description: "New body".to_string(),
        };

        let blog = service.update_blog(&slug, command).await.unwrap();
        assert_eq!(blog.title, "New Title");
    }

    #[tokio::test]
    async fn test_delete_blog_not_found() {
        let mut repository = MockTestBlogRepository::new();

        repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = BlogService::new(Arc::new(repository));

        let slug = Slug::new("missing".to_string()).unwrap();
        let result = service.delete_blog(&slug).await;
        assert!(matches!(result.unwrap_err(), BlogError::NotFound(_)));
    }
}
