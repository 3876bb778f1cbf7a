//! Single-shot wrapper over the browser geolocation API.
//!
//! The callback-style `getCurrentPosition` is adapted to a future so the
//! coordinate lookup flow reads like the city flow. A missing
//! `navigator.geolocation` (or running off-browser) reports `Unsupported`,
//! which the shell maps to its own banner without attempting a request.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

use thiserror::Error;

/// A device position fix, reduced to what the weather endpoint needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Failure modes of a position request.
#[derive(Debug, Error)]
pub enum GeolocationError {
    /// The environment exposes no geolocation API.
    #[error("geolocation is not available in this environment")]
    Unsupported,
    /// The browser reported a position failure (denied, timed out, ...).
    #[error("position lookup failed: {0}")]
    Lookup(String),
}

/// Request the current position once.
///
/// # Errors
///
/// `Unsupported` when no geolocation API exists; `Lookup` when the browser's
/// error callback fires or the request is dropped.
pub async fn current_position() -> Result<Coordinates, GeolocationError> {
    #[cfg(feature = "csr")]
    {
        current_position_browser().await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(GeolocationError::Unsupported)
    }
}

#[cfg(feature = "csr")]
async fn current_position_browser() -> Result<Coordinates, GeolocationError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
        return Err(GeolocationError::Unsupported);
    };

    let (tx, rx) = oneshot::channel();
    // Exactly one of the two callbacks fires; they share the sender.
    let tx = Rc::new(RefCell::new(Some(tx)));

    let tx_success = tx.clone();
    let on_success = Closure::once(move |position: web_sys::Position| {
        let coords = position.coords();
        if let Some(tx) = tx_success.borrow_mut().take() {
            let _ = tx.send(Ok(Coordinates {
                latitude: coords.latitude(),
                longitude: coords.longitude(),
            }));
        }
    });
    let on_error = Closure::once(move |error: web_sys::PositionError| {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(Err(GeolocationError::Lookup(error.message())));
        }
    });

    if geolocation
        .get_current_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .is_err()
    {
        return Err(GeolocationError::Unsupported);
    }

    // The browser holds the only reference once we return to the event loop.
    on_success.forget();
    on_error.forget();

    match rx.await {
        Ok(outcome) => outcome,
        Err(_) => Err(GeolocationError::Lookup("position request was dropped".to_owned())),
    }
}
