use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::blog::models::Slug;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::handlers::blogs::BlogData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_blog(
    State(state): State<AppState>,
    Path(blog_slug): Path<String>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let slug = Slug::new(blog_slug)
        .map_err(|e| ApiError::UnprocessableEntity("validation_error", e.to_string()))?;

    state
        .blog_service
        .get_blog_by_slug(&slug)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::OK, blog.into()))
}
