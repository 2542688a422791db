//! Error handling middleware - `{"message": ...}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to JSON error responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => {
                tracing::debug!("Not found: {}", detail);
                ErrorResponse::not_found()
            }
            AppError::BadRequest(detail) => {
                tracing::error!("Bad request: {}", detail);
                ErrorResponse::bad_request(detail)
            }
            AppError::Internal(detail) => {
                // The cause stays in the logs, clients get the generic message.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<blog_core::error::DomainError> for AppError {
    fn from(err: blog_core::error::DomainError) -> Self {
        match err {
            blog_core::error::DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<blog_core::error::RepoError> for AppError {
    fn from(err: blog_core::error::RepoError) -> Self {
        match err {
            blog_core::error::RepoError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            blog_core::error::RepoError::Connection(msg) => {
                AppError::Internal(format!("Database connection error: {}", msg))
            }
            blog_core::error::RepoError::Query(msg) => {
                AppError::Internal(format!("Database query error: {}", msg))
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
