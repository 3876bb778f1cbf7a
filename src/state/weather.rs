//! Weather lookup state machine with request sequencing.
//!
//! DESIGN
//! ======
//! Each lookup takes a ticket from `begin_lookup`; only the latest ticket may
//! apply its outcome. A slow response from a superseded lookup is dropped
//! instead of overwriting the newer result. After a lookup settles, at most
//! one of {report, error} is populated.

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use crate::net::types::WeatherReport;

/// Inline message when the city field is empty; no request is sent.
pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city!";

/// Banner message for a failed city lookup.
pub const CITY_LOOKUP_FAILED_MESSAGE: &str = "City not found or something went wrong!";

/// Banner message for a failed coordinate lookup or position failure.
pub const LOCATION_LOOKUP_FAILED_MESSAGE: &str =
    "Unable to retrieve weather for your current location!";

/// Banner message when the browser exposes no geolocation API; no request is
/// attempted.
pub const GEOLOCATION_UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by this browser.";

/// Identifies one issued lookup. Stale tickets are ignored on settle; the
/// default ticket was never issued and settles nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LookupTicket(u64);

/// Current weather view state: the latest report or the latest error.
#[derive(Clone, Debug, Default)]
pub struct WeatherState {
    /// The last successfully fetched report, rendered by the weather card.
    pub report: Option<WeatherReport>,
    /// The last failure message, rendered by the error banner.
    pub error: Option<String>,
    issued: u64,
}

impl WeatherState {
    /// Start a new lookup: clear any prior error and issue its ticket.
    pub fn begin_lookup(&mut self) -> LookupTicket {
        self.error = None;
        self.issued += 1;
        LookupTicket(self.issued)
    }

    /// Settle a lookup successfully: the report replaces the prior one and
    /// the error clears. Ignored when `ticket` has been superseded.
    pub fn resolve(&mut self, ticket: LookupTicket, report: WeatherReport) {
        if !self.is_current(ticket) {
            return;
        }
        self.report = Some(report);
        self.error = None;
    }

    /// Settle a lookup with a failure: the prior report clears and the fixed
    /// message shows. Ignored when `ticket` has been superseded.
    pub fn fail(&mut self, ticket: LookupTicket, message: &str) {
        if !self.is_current(ticket) {
            return;
        }
        self.report = None;
        self.error = Some(message.to_owned());
    }

    /// Report a pre-request condition (empty city, missing geolocation).
    ///
    /// No ticket is issued and the prior report stays on screen, matching the
    /// inline-validation behavior of the search flow.
    pub fn reject_input(&mut self, message: &str) {
        self.error = Some(message.to_owned());
    }

    fn is_current(&self, ticket: LookupTicket) -> bool {
        ticket.0 != 0 && ticket.0 == self.issued
    }
}
