//! HTTP handlers for the REST API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::warn;

use super::dto::{HealthResponse, Reading, ReadingRequest};
use super::error::{AppError, MISSING_FIELDS_MESSAGE};
use super::state::AppState;
use crate::services::reading::compute_reading;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check(State(_state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// POST /api/astro
///
/// Compute the Raasi and Nakshatra for a birth date and time. A body that is
/// not a JSON object of strings is treated like one with missing fields.
pub async fn post_astro(
    payload: Result<Json<ReadingRequest>, JsonRejection>,
) -> HandlerResult<Reading> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(%rejection, "unreadable reading request body");
        AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())
    })?;

    let reading = compute_reading(&request)?;
    Ok(Json(reading))
}
