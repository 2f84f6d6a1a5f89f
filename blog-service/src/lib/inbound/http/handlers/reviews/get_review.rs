use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewServicePort;
use crate::inbound::http::handlers::reviews::ReviewData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<ApiSuccess<ReviewData>, ApiError> {
    let review_id = ReviewId::from_string(&review_id)
        .map_err(|e| ApiError::BadRequest("validation_error", e.to_string()))?;

    state
        .review_service
        .get_review(&review_id)
        .await
        .map_err(ApiError::from)
        .map(|ref review| ApiSuccess::new(StatusCode::OK, review.into()))
}
