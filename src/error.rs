use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::error;

use crate::store::{ErrorKind, StoreError};

/// Application error types
///
/// Each variant carries the internal detail, which is logged but never sent
/// to the client. Clients only see a generic message and a stable `type`.
#[derive(Debug)]
pub enum AppError {
    /// Log store could not be opened or read
    StoreUnavailable(String),
    /// Log store content could not be parsed
    StoreMalformed(String),
    /// Request could not be handled for a reason unrelated to the store
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StoreUnavailable(msg) => write!(f, "Log store unavailable: {}", msg),
            Self::StoreMalformed(msg) => write!(f, "Log store malformed: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, error_type = error_type_name(&self), "Request failed");

        let (status, error_message) = match &self {
            Self::StoreUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "log store is unavailable",
            ),
            Self::StoreMalformed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "log store could not be parsed",
            ),
            Self::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::StoreUnavailable(_) => "resource_unavailable",
        AppError::StoreMalformed(_) => "parse_failure",
        AppError::InternalError(_) => "internal_error",
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err.kind() {
            ErrorKind::ResourceUnavailable => Self::StoreUnavailable(err.to_string()),
            ErrorKind::ParseFailure => Self::StoreMalformed(err.to_string()),
        }
    }
}
