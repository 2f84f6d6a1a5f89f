use auth::AuthenticationError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Exchange username + password for an access/refresh token pair.
///
/// An unknown username and a wrong password are indistinguishable to the
/// client; both answer `invalid_credentials`.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let username = Username::new(body.username).map_err(|_| invalid_credentials())?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => invalid_credentials(),
            other => ApiError::from(other),
        })?;

    let tokens = state
        .authenticator
        .authenticate(
            &body.password,
            &user.password_hash,
            user.username.as_str(),
            &user.role,
        )
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => invalid_credentials(),
            AuthenticationError::Jwt(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "bearer".to_string(),
        },
    ))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized(
        "invalid_credentials",
        "Incorrect username or password".to_string(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}
