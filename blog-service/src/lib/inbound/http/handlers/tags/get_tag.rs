use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::tag::models::TagId;
use crate::domain::tag::ports::TagServicePort;
use crate::inbound::http::handlers::tags::TagData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
) -> Result<ApiSuccess<TagData>, ApiError> {
    let tag_id = TagId::from_string(&tag_id)
        .map_err(|e| ApiError::BadRequest("validation_error", e.to_string()))?;

    state
        .tag_service
        .get_tag(&tag_id)
        .await
        .map_err(ApiError::from)
        .map(|ref tag| ApiSuccess::new(StatusCode::OK, tag.into()))
}
