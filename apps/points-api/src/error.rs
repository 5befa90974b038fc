//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Points API                             │
//! │                                                                         │
//! │  Handler  Result<Json<T>, ApiError>                                     │
//! │     │                                                                   │
//! │     ├── body is not a Receipt ─── serde_json::Error ──► 400 DECODE_ERROR│
//! │     │                                                                   │
//! │     ├── unknown id ────────────── StoreError::NotFound ► 404 NOT_FOUND  │
//! │     │                                                                   │
//! │     └── store backend failure ─── StoreError::Internal ► 500 INTERNAL   │
//! │                                                                         │
//! │  Response body is plain text: the message only.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use points_store::StoreError;
use serde::Serialize;
use tracing::{error, warn};

/// API error returned from handlers.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Machine-readable error code, used for status and logging
    pub code: ErrorCode,

    /// Human-readable error message sent as the response body
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body is not a well-formed receipt (400)
    DecodeError,

    /// No receipt with the requested id (404)
    NotFound,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::DecodeError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a decode error from the JSON decoder's message.
    pub fn decode(err: serde_json::Error) -> Self {
        ApiError::new(ErrorCode::DecodeError, err.to_string())
    }

    /// Creates a not found error.
    pub fn not_found(id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("Receipt not found: {}", id))
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::not_found(&id),
            StoreError::Internal(e) => {
                // Log the actual error but return a generic message
                error!("Receipt store failed: {}", e);
                ApiError::internal("Receipt store unavailable")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        if status.is_client_error() {
            warn!(code = ?self.code, message = %self.message, "Request rejected");
        }
        (status, self.message).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorCode::DecodeError.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_errors_map_to_api_errors() {
        let err: ApiError = StoreError::not_found("abc").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Receipt not found: abc");

        let err: ApiError = StoreError::Internal("disk on fire".into()).into();
        assert_eq!(err.code, ErrorCode::Internal);
        assert!(!err.message.contains("disk"));
    }

    #[test]
    fn test_decode_error_keeps_decoder_message() {
        let json_err = serde_json::from_str::<points_core::Receipt>("{").unwrap_err();
        let expected = json_err.to_string();
        let err = ApiError::decode(json_err);
        assert_eq!(err.code, ErrorCode::DecodeError);
        assert_eq!(err.message, expected);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::not_found("abc").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
