//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field. No
//! validation is layered on top: whatever the backend returns for a weather
//! lookup is rendered as-is by the weather card.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimal identity record surfaced by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Email address the account was registered with.
    pub email: String,
}

/// Token payload returned by `POST /login` and `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque session token; presented on subsequent weather requests.
    #[serde(rename = "idToken")]
    pub id_token: String,
}

/// Flat weather record for one location, as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Resolved location name.
    pub city: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Human-readable conditions description.
    pub weather: String,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Wind speed in km/h.
    pub wind_speed: f64,
}

/// Failure modes of a backend request.
///
/// The UI collapses these to fixed banner/notice strings; the variants exist
/// so logs can tell a dead server from a rejected request or a malformed
/// body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}
