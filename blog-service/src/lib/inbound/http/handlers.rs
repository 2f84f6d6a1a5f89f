use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

// Leading `::` keeps the crate import unambiguous next to the `auth` handler module
use ::auth::AuthError;

use crate::domain::blog::errors::BlogError;
use crate::domain::review::errors::ReviewError;
use crate::domain::tag::errors::TagError;
use crate::domain::user::errors::UserError;

pub mod auth;
pub mod blogs;
pub mod reviews;
pub mod tags;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Transport-level failure: a status code plus a stable machine-readable
/// error code and a human message. Every domain failure maps into one of
/// these; nothing else leaves the handler layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(&'static str, String),
    Unauthorized(&'static str, String),
    Forbidden(&'static str, String),
    NotFound(&'static str, String),
    Conflict(&'static str, String),
    UnprocessableEntity(&'static str, String),
    InternalServerError(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(code, msg) => (StatusCode::BAD_REQUEST, code, msg),
            ApiError::Unauthorized(code, msg) => (StatusCode::UNAUTHORIZED, code, msg),
            ApiError::Forbidden(code, msg) => (StatusCode::FORBIDDEN, code, msg),
            ApiError::NotFound(code, msg) => (StatusCode::NOT_FOUND, code, msg),
            ApiError::Conflict(code, msg) => (StatusCode::CONFLICT, code, msg),
            ApiError::UnprocessableEntity(code, msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, code, msg)
            }
            ApiError::InternalServerError(msg) => {
                // The detail stays in the logs; clients get a generic shape
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server_error",
                    "Oops! Something went wrong".to_string(),
                )
            }
        };

        (
            status,
            Json(ApiResponseBody::new_error(status, error_code, message)),
        )
            .into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        match err {
            AuthError::MissingCredential => ApiError::Unauthorized("missing_credentials", message),
            AuthError::InvalidScheme => ApiError::BadRequest("invalid_scheme", message),
            AuthError::InvalidToken(_) => ApiError::Unauthorized("invalid_token", message),
            AuthError::AccessTokenRequired => {
                ApiError::Unauthorized("access_token_required", message)
            }
            AuthError::RefreshTokenRequired => {
                ApiError::Forbidden("refresh_token_required", message)
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound("user_not_found", message)
            }
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict("user_exists", message)
            }
            UserError::InvalidCredentials => ApiError::Unauthorized("invalid_credentials", message),
            UserError::PasswordIncorrect => ApiError::BadRequest("password_incorrect", message),
            UserError::PasswordMismatch => ApiError::BadRequest("password_do_not_match", message),
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidUserId(_) => ApiError::UnprocessableEntity("validation_error", message),
            UserError::Password(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(message)
            }
        }
    }
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        let message = err.to_string();
        match err {
            BlogError::NotFound(_) => ApiError::NotFound("blog_not_found", message),
            BlogError::AlreadyExists(_) => ApiError::Conflict("blog_exists", message),
            BlogError::InvalidSlug(_) => ApiError::UnprocessableEntity("validation_error", message),
            BlogError::DatabaseError(_) | BlogError::Unknown(_) => {
                ApiError::InternalServerError(message)
            }
        }
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        let message = err.to_string();
        match err {
            ReviewError::NotFound(_) => ApiError::NotFound("review_not_found", message),
            ReviewError::BlogNotFound(_) => ApiError::NotFound("blog_not_found", message),
            ReviewError::NotReviewAuthor => ApiError::Forbidden("review_forbidden", message),
            ReviewError::InvalidReviewId(_) | ReviewError::InvalidRating(_) => {
                ApiError::UnprocessableEntity("validation_error", message)
            }
            ReviewError::DatabaseError(_) => ApiError::InternalServerError(message),
        }
    }
}

impl From<TagError> for ApiError {
    fn from(err: TagError) -> Self {
        let message = err.to_string();
        match err {
            TagError::NotFound(_) => ApiError::NotFound("tag_not_found", message),
            TagError::AlreadyExists(_) => ApiError::Conflict("tag_exists", message),
            TagError::BlogNotFound(_) => ApiError::NotFound("blog_not_found", message),
            TagError::InvalidTagId(_) => ApiError::UnprocessableEntity("validation_error", message),
            TagError::DatabaseError(_) => ApiError::InternalServerError(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, error_code: &'static str, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                message,
                error_code,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    pub error_code: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_failures_map_to_stable_codes() {
        assert!(matches!(
            ApiError::from(AuthError::MissingCredential),
            ApiError::Unauthorized("missing_credentials", _)
        ));
        assert!(matches!(
            ApiError::from(AuthError::InvalidScheme),
            ApiError::BadRequest("invalid_scheme", _)
        ));
        assert!(matches!(
            ApiError::from(AuthError::AccessTokenRequired),
            ApiError::Unauthorized("access_token_required", _)
        ));
        assert!(matches!(
            ApiError::from(AuthError::RefreshTokenRequired),
            ApiError::Forbidden("refresh_token_required", _)
        ));
    }

    #[test]
    fn test_user_failures_map_to_stable_codes() {
        assert!(matches!(
            ApiError::from(UserError::InvalidCredentials),
            ApiError::Unauthorized("invalid_credentials", _)
        ));
        assert!(matches!(
            ApiError::from(UserError::PasswordIncorrect),
            ApiError::BadRequest("password_incorrect", _)
        ));
        assert!(matches!(
            ApiError::from(UserError::PasswordMismatch),
            ApiError::BadRequest("password_do_not_match", _)
        ));
        assert!(matches!(
            ApiError::from(UserError::UsernameAlreadyExists("bob".to_string())),
            ApiError::Conflict("user_exists", _)
        ));
    }

    #[test]
    fn test_database_failures_stay_generic() {
        assert!(matches!(
            ApiError::from(BlogError::DatabaseError("connection refused".to_string())),
            ApiError::InternalServerError(_)
        ));
    }
}
