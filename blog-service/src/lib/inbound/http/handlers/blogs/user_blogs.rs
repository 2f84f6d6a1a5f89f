use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::extractors::CurrentUser;
use crate::inbound::http::handlers::blogs::BlogData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn user_blogs(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<ApiSuccess<Vec<BlogData>>, ApiError> {
    state
        .blog_service
        .list_blogs_by_author(&user.id)
        .await
        .map_err(ApiError::from)
        .map(|blogs| {
            ApiSuccess::new(
                StatusCode::OK,
                blogs.iter().map(BlogData::from).collect(),
            )
        })
}
