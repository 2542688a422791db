//! Standardized error body: `{"message": "..."}`.

use serde::{Deserialize, Serialize};

/// Error payload returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(detail)
    }

    pub fn not_found() -> Self {
        Self::new("Not found")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}
