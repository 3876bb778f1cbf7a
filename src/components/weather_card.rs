//! Card rendering the latest weather report.

use leptos::prelude::*;

use crate::net::types::WeatherReport;

/// Renders nothing while no report is present, otherwise the four fields
/// exactly as the backend returned them.
#[component]
pub fn WeatherCard(#[prop(into)] report: Signal<Option<WeatherReport>>) -> impl IntoView {
    move || {
        report.get().map(|r| {
            view! {
                <div class="weather-card">
                    <h3 class="weather-card__city">{r.city}</h3>
                    <p>"Temperature: " {r.temperature} "°C"</p>
                    <p>"Weather: " {r.weather}</p>
                    <p>"Humidity: " {r.humidity} "%"</p>
                    <p>"Wind: " {r.wind_speed} " km/h"</p>
                </div>
            }
        })
    }
}
