use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::blog::models::Slug;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::AddTagsCommand;
use crate::domain::tag::models::Tag;
use crate::domain::tag::models::TagId;
use crate::domain::tag::models::UpsertTagCommand;
use crate::domain::tag::ports::TagRepository;
use crate::domain::tag::ports::TagServicePort;

/// Domain service implementation for tag operations.
pub struct TagService<TR, BR>
where
    TR: TagRepository,
    BR: BlogRepository,
{
    repository: Arc<TR>,
    blog_repository: Arc<BR>,
}

impl<TR, BR> TagService<TR, BR>
where
    TR: TagRepository,
    BR: BlogRepository,
{
    pub fn new(repository: Arc<TR>, blog_repository: Arc<BR>) -> Self {
        Self {
            repository,
            blog_repository,
        }
    }

    fn new_tag(title: String) -> Tag {
        let now = Utc::now();
        Tag {
            id: TagId::new(),
            title,
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl<TR, BR> TagServicePort for TagService<TR, BR>
where
    TR: TagRepository,
    BR: BlogRepository,
{
    async fn list_tags(&self) -> Result<Vec<Tag>, TagError> {
        self.repository.list_all().await
    }

    async fn get_tag(&self, id: &TagId) -> Result<Tag, TagError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TagError::NotFound(id.to_string()))
    }

    async fn create_tag(&self, command: UpsertTagCommand) -> Result<Tag, TagError> {
        if self
            .repository
            .find_by_title(&command.title)
            .await?
            .is_some()
        {
            return Err(TagError::AlreadyExists(command.title));
        }

        self.repository.create(Self::new_tag(command.title)).await
    }

    async fn add_tags_to_blog(
        &self,
        blog_slug: &Slug,
        command: AddTagsCommand,
    ) -> Result<Vec<Tag>, TagError> {
        let blog = self
            .blog_repository
            .find_by_slug(blog_slug)
            .await
            .map_err(|e| TagError::DatabaseError(e.to_string()))?
            .ok_or(TagError::BlogNotFound(blog_slug.to_string()))?;

        let mut tags = Vec::with_capacity(command.titles.len());
        for title in command.titles {
            let tag = match self.repository.find_by_title(&title).await? {
                Some(tag) => tag,
                None => self.repository.create(Self::new_tag(title)).await?,
            };

            self.repository.link_to_blog(&tag.id, &blog.id).await?;
            tags.push(tag);
        }

        Ok(tags)
    }

    async fn update_tag(&self, id: &TagId, command: UpsertTagCommand) -> Result<Tag, TagError> {
        let mut tag = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TagError::NotFound(id.to_string()))?;

        tag.title = command.title;
        tag.updated_at = Utc::now();

        self.repository.update(tag).await
    }

    async fn delete_tag(&self, id: &TagId) -> Result<(), TagError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TagError::NotFound(id.to_string()))?;

        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::mock;

    use super::*;
    use crate::domain::blog::errors::BlogError;
    use crate::domain::blog::models::Blog;
    use crate::domain::blog::models::BlogId;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::UserSummary;

    mock! {
        pub TestTagRepository {}

        #[async_trait]
        impl TagRepository for TestTagRepository {
            async fn create(&self, tag: Tag) -> Result<Tag, TagError>;
            async fn find_by_id(&self, id: &TagId) -> Result<Option<Tag>, TagError>;
            async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, TagError>;
            async fn list_all(&self) -> Result<Vec<Tag>, TagError>;
            async fn update(&self, tag: Tag) -> Result<Tag, TagError>;
            async fn delete(&self, id: &TagId) -> Result<(), TagError>;
            async fn link_to_blog(&self, tag_id: &TagId, blog_id: &BlogId) -> Result<(), TagError>;
        }
    }

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

    fn existing_blog() -> Blog {
        let now = Utc::now();
        Blog {
            id: BlogId::new(),
            title: "A Post".to_string(),
            description: "Body".to_string(),
            slug: Slug::new("a-post".to_string()).unwrap(),
            publish_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            author: UserSummary {
                id: UserId::new(),
                username: "alice".to_string(),
            },
            created_at: now,
            updated_at: now,
        }
    }

    fn existing_tag(title: &str) -> Tag {
        let now = Utc::now();
        Tag {
            id: TagId::new(),
            title: title.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_tag_success() {
        let mut tag_repository = MockTestTagRepository::new();
        let blog_repository = MockTestBlogRepository::new();

        tag_repository
            .expect_find_by_title()
            .withf(|title| title == "rust")
            .times(1)
            .returning(|_| Ok(None));
        tag_repository
            .expect_create()
            .withf(|tag| tag.title == "rust")
            .times(1)
            .returning(Ok);

        let service = TagService::new(Arc::new(tag_repository), Arc::new(blog_repository));

        let tag = service
            .create_tag(UpsertTagCommand {
                title: "rust".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(tag.title, "rust");
    }

    #[tokio::test]
    async fn test_create_tag_duplicate_title() {
        let mut tag_repository = MockTestTagRepository::new();
        let blog_repository = MockTestBlogRepository::new();

        tag_repository
            .expect_find_by_title()
            .times(1)
            .returning(|_| Ok(Some(existing_tag("rust"))));
        tag_repository.expect_create().times(0);

        let service = TagService::new(Arc::new(tag_repository), Arc::new(blog_repository));

        let result = service
            .create_tag(UpsertTagCommand {
                title: "rust".to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), TagError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_add_tags_creates_missing_and_links_all() {
        let mut tag_repository = MockTestTagRepository::new();
        let mut blog_repository = MockTestBlogRepository::new();

        blog_repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(Some(existing_blog())));

        // "rust" already exists, "axum" gets created on the fly
        tag_repository
            .expect_find_by_title()
            .withf(|title| title == "rust")
            .times(1)
            .returning(|_| Ok(Some(existing_tag("rust"))));
        tag_repository
            .expect_find_by_title()
            .withf(|title| title == "axum")
            .times(1)
            .returning(|_| Ok(None));
        tag_repository
            .expect_create()
            .withf(|tag| tag.title == "axum")
            .times(1)
            .returning(Ok);
        tag_repository
            .expect_link_to_blog()
            .times(2)
            .returning(|_, _| Ok(()));

        let service = TagService::new(Arc::new(tag_repository), Arc::new(blog_repository));

        let slug = Slug::new("a-post".to_string()).unwrap();
        let tags = service
            .add_tags_to_blog(
                &slug,
                AddTagsCommand {
                    titles: vec!["rust".to_string(), "axum".to_string()],
                },
            )
            .await
            .unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].title, "rust");
        assert_eq!(tags[1].title, "axum");
    }

    #[tokio::test]
    async fn test_add_tags_missing_blog() {
        let mut tag_repository = MockTestTagRepository::new();
        let mut blog_repository = MockTestBlogRepository::new();

        blog_repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));
        tag_repository.expect_link_to_blog().times(0);

        let service = TagService::new(Arc::new(tag_repository), Arc::new(blog_repository));

        let slug = Slug::new("missing".to_string()).unwrap();
        let result = service
            .add_tags_to_blog(
                &slug,
                AddTagsCommand {
                    titles: vec!["rust".to_string()],
                },
            )
            .await;
        assert!(matches!(result.unwrap_err(), TagError::BlogNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_tag_not_found() {
        let mut tag_repository = MockTestTagRepository::new();
        let blog_repository = MockTestBlogRepository::new();

        tag_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        tag_repository.expect_update().times(0);

        let service = TagService::new(Arc::new(tag_repository), Arc::new(blog_repository));

        let result = service
            .update_tag(
                &TagId::new(),
                UpsertTagCommand {
                    title: "renamed".to_string(),
                },
            )
            .await;
        assert!(matches!(result.unwrap_err(), TagError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_tag_success() {
        let mut tag_repository = MockTestTagRepository::new();
        let blog_repository = MockTestBlogRepository::new();

        let tag = existing_tag("rust");
        let tag_id = tag.id;

        tag_repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(tag.clone())));
        tag_repository
            .expect_delete()
            .withf(move |id| *id == tag_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = TagService::new(Arc::new(tag_repository), Arc::new(blog_repository));

        let result = service.delete_tag(&tag_id).await;
        assert!(result.is_ok());
    }
}
