//! User Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type UserResult<T> = Result<T, UserError>;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Email is already registered")]
    EmailTaken,

    /// Old password did not match on change-password
    #[error("Wrong password")]
    InvalidCredentials,

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::NotFound => StatusCode::NOT_FOUND,
            UserError::EmailTaken => StatusCode::CONFLICT,
            UserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            UserError::Validation(_) => StatusCode::BAD_REQUEST,
            UserError::Database(_) | UserError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::NotFound => ErrorKind::NotFound,
            UserError::EmailTaken => ErrorKind::Conflict,
            UserError::InvalidCredentials => ErrorKind::Unauthorized,
            UserError::Validation(_) => ErrorKind::BadRequest,
            UserError::Database(_) | UserError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Store failures are classified by `kernel`.
    pub fn into_app_error(self) -> AppError {
        match self {
            UserError::Database(e) => AppError::from(e),
            UserError::Internal(_) => AppError::internal("Internal server error"),
            UserError::EmailTaken => AppError::conflict("Email is already registered")
                .with_action("Use a different email address"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "Users database error");
            }
            UserError::Internal(msg) => {
                tracing::error!(message = %msg, "Users internal error");
            }
            UserError::InvalidCredentials => {
                tracing::warn!("Password change with wrong old password");
            }
            _ => {
                tracing::debug!(error = %self, "User error");
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<platform::password::PasswordPolicyError> for UserError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        UserError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for UserError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        UserError::Internal(err.to_string())
    }
}
