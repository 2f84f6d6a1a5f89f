use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::blog::models::Slug;
use crate::domain::tag::models::AddTagsCommand;
use crate::domain::tag::ports::TagServicePort;
use crate::inbound::http::handlers::tags::TagData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Attach a batch of tag titles to a blog, creating any that do not exist yet.
pub async fn add_tags_to_blog(
    State(state): State<AppState>,
    Path(blog_slug): Path<String>,
    Json(body): Json<AddTagsRequest>,
) -> Result<ApiSuccess<Vec<TagData>>, ApiError> {
    let slug = Slug::new(blog_slug)
        .map_err(|e| ApiError::UnprocessableEntity("validation_error", e.to_string()))?;

    let command = AddTagsCommand {
        titles: body.tags.into_iter().map(|tag| tag.title).collect(),
    };

    state
        .tag_service
        .add_tags_to_blog(&slug, command)
        .await
        .map_err(ApiError::from)
        .map(|tags| {
            ApiSuccess::new(
                StatusCode::CREATED,
                tags.iter().map(TagData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddTagsRequest {
    tags: Vec<TagTitle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagTitle {
    title: String,
}
