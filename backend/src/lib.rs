//! # Raasi Backend
//!
//! Lunar zodiac (Raasi) and lunar mansion (Nakshatra) readings from a birth
//! date and time, in Tamil and English.
//!
//! The computation converts the UTC birth moment to a Julian Day, evaluates
//! the Moon's geocentric ecliptic longitude with the Meeus chapter 47 series,
//! and buckets the longitude into 12 sectors of 30° and 27 sectors of 13°20′.
//!
//! ## Architecture
//!
//! - [`models`]: birth moment, Julian Day and sector index types
//! - [`services`]: lunar longitude, sector mapping and the reading pipeline
//! - [`config`]: server configuration from TOML and environment
//! - [`error`]: domain error type
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
