//! REST calls against the weather backend.
//!
//! Client-side (`csr`): real HTTP via `gloo-net`.
//! Off-browser: stubs returning `ApiError::Transport` so host-side tests and
//! tooling never attempt a fetch.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ApiError>`. Callers map the error to a
//! fixed user-facing string; the variants only feed the console log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, WeatherReport};
#[cfg(feature = "csr")]
use super::types::TokenResponse;

/// Base URL of the backend serving auth and weather endpoints.
pub const API_BASE: &str = "http://localhost:8000";

#[cfg(any(test, feature = "csr"))]
fn login_endpoint() -> String {
    format!("{API_BASE}/login")
}

#[cfg(any(test, feature = "csr"))]
fn signup_endpoint() -> String {
    format!("{API_BASE}/signup")
}

#[cfg(any(test, feature = "csr"))]
fn city_weather_endpoint(city: &str, token: &str) -> String {
    format!("{API_BASE}/weather/{city}?id_token={token}")
}

#[cfg(any(test, feature = "csr"))]
fn coordinate_weather_endpoint(lat: f64, lon: f64, token: &str) -> String {
    format!("{API_BASE}/weather/current?lat={lat}&lon={lon}&id_token={token}")
}

/// POST credentials to an auth endpoint and extract the issued token.
#[cfg(feature = "csr")]
async fn post_credentials(endpoint: &str, email: &str, password: &str) -> Result<String, ApiError> {
    let payload = serde_json::json!({ "email": email, "password": password });
    let resp = gloo_net::http::Request::post(endpoint)
        .json(&payload)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let body: TokenResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.id_token)
}

/// GET a weather endpoint and decode the flat report.
#[cfg(feature = "csr")]
async fn fetch_weather(endpoint: &str) -> Result<WeatherReport, ApiError> {
    let resp = gloo_net::http::Request::get(endpoint)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange credentials for a session token via `POST /login`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, the server rejects the
/// credentials, or the body lacks an `idToken`.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        post_credentials(&login_endpoint(), email, password).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Register a new account and receive a session token via `POST /signup`.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn signup(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        post_credentials(&signup_endpoint(), email, password).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Fetch weather for a named city via `GET /weather/{city}`.
///
/// The session token rides along as the `id_token` query parameter; the
/// backend owns token validation.
///
/// # Errors
///
/// Returns an `ApiError` for transport failures, non-success statuses
/// (unknown city included), and undecodable bodies.
pub async fn weather_by_city(city: &str, token: &str) -> Result<WeatherReport, ApiError> {
    #[cfg(feature = "csr")]
    {
        log::debug!("weather lookup for city {city:?}");
        fetch_weather(&city_weather_endpoint(city, token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (city, token);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Fetch weather for coordinates via `GET /weather/current`.
///
/// # Errors
///
/// Same contract as [`weather_by_city`].
pub async fn weather_by_coordinates(
    lat: f64,
    lon: f64,
    token: &str,
) -> Result<WeatherReport, ApiError> {
    #[cfg(feature = "csr")]
    {
        log::debug!("weather lookup for coordinates ({lat}, {lon})");
        fetch_weather(&coordinate_weather_endpoint(lat, lon, token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (lat, lon, token);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}
