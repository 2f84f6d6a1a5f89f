use axum::http::StatusCode;

use crate::inbound::http::extractors::CurrentUser;
use crate::inbound::http::handlers::auth::UserData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;

pub async fn me(CurrentUser(user): CurrentUser) -> Result<ApiSuccess<UserData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, UserData::from(&user)))
}
