use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// The authenticated principal of a protected request.
///
/// Extraction runs the access-token gate over the Authorization header, then
/// resolves the claims subject to a live user record. A token whose subject
/// was deleted after issuance is a valid token for a missing identity, so that
/// case surfaces as `user_not_found` rather than a token failure. Resolution
/// happens per request; nothing is cached across requests.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let claims = state.access_guard.verify(authorization).map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            ApiError::from(e)
        })?;

        let username = Username::new(claims.sub.clone()).map_err(|_| {
            ApiError::Unauthorized(
                "invalid_token",
                "Token is invalid or expired".to_string(),
            )
        })?;

        let user = state
            .user_service
            .get_user_by_username(&username)
            .await
            .map_err(|e| match e {
                UserError::NotFoundByUsername(_) => {
                    tracing::warn!(subject = %username, "Token subject no longer exists");
                    ApiError::NotFound("user_not_found", "User not found".to_string())
                }
                other => ApiError::from(other),
            })?;

        Ok(CurrentUser(user))
    }
}
