//! Data Transfer Objects for the HTTP API.
//!
//! The reading request and response are defined next to the pipeline that
//! consumes them and re-exported here.

use serde::{Deserialize, Serialize};

pub use crate::services::reading::{Reading, ReadingRequest};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
}
