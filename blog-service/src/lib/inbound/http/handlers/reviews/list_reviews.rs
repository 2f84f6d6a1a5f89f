use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::review::ports::ReviewServicePort;
use crate::inbound::http::handlers::reviews::ReviewData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ReviewData>>, ApiError> {
    state
        .review_service
        .list_reviews()
        .await
        .map_err(ApiError::from)
        .map(|reviews| {
            ApiSuccess::new(
                StatusCode::OK,
                reviews.iter().map(ReviewData::from).collect(),
            )
        })
}
