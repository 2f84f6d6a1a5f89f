use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::blog::models::Slug;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::extractors::CurrentUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_blog(
    State(state): State<AppState>,
    Path(blog_slug): Path<String>,
    _user: CurrentUser,
) -> Result<ApiSuccess<DeleteBlogResponseData>, ApiError> {
    let slug = Slug::new(blog_slug)
        .map_err(|e| ApiError::UnprocessableEntity("validation_error", e.to_string()))?;

    state
        .blog_service
        .delete_blog(&slug)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        DeleteBlogResponseData {
            message: "Blog successfully deleted".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteBlogResponseData {
    pub message: String,
}
