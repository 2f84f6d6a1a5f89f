use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::blog::models::Slug;
use crate::domain::blog::models::UpdateBlogCommand;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::extractors::CurrentUser;
use crate::inbound::http::handlers::blogs::BlogData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_blog(
    State(state): State<AppState>,
    Path(blog_slug): Path<String>,
    _user: CurrentUser,
    Json(body): Json<UpdateBlogRequest>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let slug = Slug::new(blog_slug)
        .map_err(|e| ApiError::UnprocessableEntity("validation_error", e.to_string()))?;

    let command = UpdateBlogCommand {
        title: body.title,
        description: body.description,
    };

    state
        .blog_service
        .update_blog(&slug, command)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::ACCEPTED, blog.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateBlogRequest {
    title: String,
    description: String,
}
