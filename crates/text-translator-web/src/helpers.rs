//! Helper types and traits for cleaner route handlers.
//!
//! Errors leave the service as `{"detail": "..."}` JSON bodies so clients can
//! always show why a request failed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use text_translator_core::Error;

/// Standard result type for route handlers.
pub type RouteResult<T> = Result<T, ApiError>;

/// An error response with a status code and a human-readable detail.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: &self.detail })).into_response()
    }
}

/// Map core errors to HTTP statuses.
///
/// Bad input is the caller's fault (400); an exhausted cascade means every
/// upstream provider failed (502); running out of time is a gateway timeout (504).
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match err {
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::CascadeExhausted { .. }
            | Error::ProviderUnavailable { .. }
            | Error::ProviderRejected { .. }
            | Error::ProviderEmptyResult { .. } => StatusCode::BAD_GATEWAY,
            Error::DeadlineExceeded { .. } => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

/// Extension trait for converting `Result<T, E>` to `RouteResult<T>`.
pub trait ResultExt<T, E: std::fmt::Display> {
    /// Converts the error to 400 Bad Request.
    fn or_bad_request(self) -> RouteResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn or_bad_request(self) -> RouteResult<T> {
        self.map_err(|e| ApiError::bad_request(e.to_string()))
    }
}
