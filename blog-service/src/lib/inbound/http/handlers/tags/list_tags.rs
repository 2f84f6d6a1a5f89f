use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::tag::ports::TagServicePort;
use crate::inbound::http::handlers::tags::TagData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_tags(State(state): State<AppState>) -> Result<ApiSuccess<Vec<TagData>>, ApiError> {
    state
        .tag_service
        .list_tags()
        .await
        .map_err(ApiError::from)
        .map(|tags| ApiSuccess::new(StatusCode::OK, tags.iter().map(TagData::from).collect()))
}
