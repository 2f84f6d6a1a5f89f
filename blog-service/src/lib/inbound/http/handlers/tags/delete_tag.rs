use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::tag::models::TagId;
use crate::domain::tag::ports::TagServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
) -> Result<ApiSuccess<DeleteTagResponseData>, ApiError> {
    let tag_id = TagId::from_string(&tag_id)
        .map_err(|e| ApiError::BadRequest("validation_error", e.to_string()))?;

    state
        .tag_service
        .delete_tag(&tag_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        DeleteTagResponseData {
            message: "Tag successfully deleted".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteTagResponseData {
    pub message: String,
}
