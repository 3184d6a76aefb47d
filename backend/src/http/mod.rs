//! HTTP server module.
//!
//! An axum-based server exposing the reading pipeline as a JSON API and
//! serving the client bundle from disk.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - JSON extraction, presence check reporting              │
//! │  - CORS, compression, tracing, panic recovery             │
//! │  - Static client bundle with index.html fallback          │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services::reading)                        │
//! │  - BirthMoment -> JulianDay -> Moon λ -> Raasi/Nakshatra   │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
