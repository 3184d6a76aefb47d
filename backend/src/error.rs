//! Error types for the reading pipeline.
//!
//! Two classes of failure exist. A *validation* failure means the caller did
//! not supply a required field; it is reported back verbatim. Everything else
//! is a *computation* failure and is only ever logged server-side.

use thiserror::Error;

/// Result type for reading operations.
pub type AstroResult<T> = Result<T, AstroError>;

#[derive(Debug, Error)]
pub enum AstroError {
    /// A required request field was absent or empty.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// The date of birth did not parse as `YYYY-MM-DD`.
    #[error("invalid date of birth '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The time of birth did not parse as `HH:MM`.
    #[error("invalid time of birth '{input}': {source}")]
    InvalidTime {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Calendar fields that do not name a real date or time.
    #[error("calendar fields out of range: {0}")]
    OutOfRange(String),

    /// The estimator produced NaN or an infinity.
    #[error("lunar longitude is not finite: {0}")]
    NonFiniteLongitude(f64),
}

impl AstroError {
    /// Whether this error should be reported to the caller as a bad request.
    pub fn is_validation(&self) -> bool {
        matches!(self, AstroError::MissingField(_))
    }
}
