use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewServicePort;
use crate::inbound::http::extractors::CurrentUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    CurrentUser(user): CurrentUser,
) -> Result<ApiSuccess<DeleteReviewResponseData>, ApiError> {
    let review_id = ReviewId::from_string(&review_id)
        .map_err(|e| ApiError::BadRequest("validation_error", e.to_string()))?;

    state
        .review_service
        .delete_review(&review_id, &user.id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        DeleteReviewResponseData {
            message: "Review successfully deleted".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteReviewResponseData {
    pub message: String,
}
