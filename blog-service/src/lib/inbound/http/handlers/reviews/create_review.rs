use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::blog::models::Slug;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Rating;
use crate::domain::review::ports::ReviewServicePort;
use crate::domain::user::models::UserSummary;
use crate::inbound::http::extractors::CurrentUser;
use crate::inbound::http::handlers::reviews::ReviewData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_review(
    State(state): State<AppState>,
    Path(blog_slug): Path<String>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CreateReviewRequest>,
) -> Result<ApiSuccess<ReviewData>, ApiError> {
    let slug = Slug::new(blog_slug)
        .map_err(|e| ApiError::UnprocessableEntity("validation_error", e.to_string()))?;
    let rating = Rating::new(body.rating)
        .map_err(|e| ApiError::UnprocessableEntity("validation_error", e.to_string()))?;

    let command = CreateReviewCommand {
        body: body.body,
        rating,
        author: UserSummary::from(&user),
    };

    state
        .review_service
        .add_review_to_blog(&slug, command)
        .await
        .map_err(ApiError::from)
        .map(|ref review| ApiSuccess::new(StatusCode::CREATED, review.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateReviewRequest {
    body: String,
    rating: i32,
}
