use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use chrono::Utc;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Mint a new access token from a presented refresh token.
///
/// The refresh guard validates signature, expiry, and kind; the explicit
/// expiry re-check keeps the failure answer identical even if decoding
/// applied leeway.
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<RefreshTokenResponseData>, ApiError> {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let claims = state.refresh_guard.verify(authorization)?;

    if claims.is_expired(Utc::now().timestamp()) {
        return Err(ApiError::Unauthorized(
            "invalid_token",
            "Token is invalid or expired".to_string(),
        ));
    }

    let access_token = state
        .authenticator
        .issue_access_token(&claims.sub, &claims.role)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RefreshTokenResponseData { access_token },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshTokenResponseData {
    pub access_token: String,
}
