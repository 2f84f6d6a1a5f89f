use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::blog::errors::SlugError;
use crate::domain::blog::models::CreateBlogCommand;
use crate::domain::blog::models::Slug;
use crate::domain::blog::ports::BlogServicePort;
use crate::domain::user::models::UserSummary;
use crate::inbound::http::extractors::CurrentUser;
use crate::inbound::http::handlers::blogs::BlogData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_blog(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CreateBlogRequest>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let command = body.try_into_command(UserSummary::from(&user))?;

    state
        .blog_service
        .create_blog(command)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::CREATED, blog.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBlogRequest {
    title: String,
    description: String,
    slug: String,
    publish_date: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateBlogRequestError {
    #[error("Invalid slug: {0}")]
    Slug(#[from] SlugError),

    #[error("Invalid publish date: {0}")]
    PublishDate(#[from] chrono::ParseError),
}

impl CreateBlogRequest {
    fn try_into_command(
        self,
        author: UserSummary,
    ) -> Result<CreateBlogCommand, ParseCreateBlogRequestError> {
        let slug = Slug::new(self.slug)?;
        let publish_date = NaiveDate::parse_from_str(&self.publish_date, "%Y-%m-%d")?;
        Ok(CreateBlogCommand {
            title: self.title,
            description: self.description,
            slug,
            publish_date,
            author,
        })
    }
}

impl From<ParseCreateBlogRequestError> for ApiError {
    fn from(err: ParseCreateBlogRequestError) -> Self {
        ApiError::UnprocessableEntity("validation_error", err.to_string())
    }
}
