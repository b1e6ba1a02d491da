//! Order Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type OrderResult<T> = Result<T, OrderError>;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl OrderError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::NotFound => StatusCode::NOT_FOUND,
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::Database(_) | OrderError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotFound => ErrorKind::NotFound,
            OrderError::Validation(_) => ErrorKind::BadRequest,
            OrderError::Database(_) | OrderError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            OrderError::Database(e) => AppError::from(e),
            OrderError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            OrderError::Database(e) => {
                tracing::error!(error = %e, "Orders database error");
            }
            OrderError::Internal(msg) => {
                tracing::error!(message = %msg, "Orders internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Order error");
            }
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
