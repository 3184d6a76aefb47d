//! HTTP error handling and response types.

use std::any::Any;

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::AstroError;

/// Reported for any missing required field or unreadable body.
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide all required details (name, dob, tob).";

/// Reported for every internal failure; details stay in the server log.
pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred.";

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error); the message is sent to the client
    BadRequest(String),
    /// Internal server error; the message is logged, never sent
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new(msg)),
            AppError::Internal(detail) => {
                error!(%detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new(SERVER_ERROR_MESSAGE),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<AstroError> for AppError {
    fn from(err: AstroError) -> Self {
        if err.is_validation() {
            warn!(%err, "rejected reading request");
            AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

/// Turn a handler panic into the same 500 body as any other internal failure.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
