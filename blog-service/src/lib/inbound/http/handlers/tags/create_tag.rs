use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::tag::models::UpsertTagCommand;
use crate::domain::tag::ports::TagServicePort;
use crate::inbound::http::handlers::tags::TagData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_tag(
    State(state): State<AppState>,
    Json(body): Json<CreateTagRequest>,
) -> Result<ApiSuccess<TagData>, ApiError> {
    state
        .tag_service
        .create_tag(UpsertTagCommand { title: body.title })
        .await
        .map_err(ApiError::from)
        .map(|ref tag| ApiSuccess::new(StatusCode::CREATED, tag.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTagRequest {
    title: String,
}
