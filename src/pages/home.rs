//! App shell: login/signup for visitors, the weather lookup UI once a
//! session exists.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the `/` route. It reads the session context to pick the view,
//! drives the weather state machine for city and geolocation lookups, and
//! owns the logout action (delete the stored token, back to the login
//! screen; the identity provider is not contacted here).

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::search_bar::SearchBar;
use crate::components::weather_card::WeatherCard;
use crate::pages::login::AuthPanel;
use crate::state::session::SessionState;
use crate::state::weather::{EMPTY_CITY_MESSAGE, WeatherState};

/// Trim the city input and require a value before a request goes out.
fn validate_city(raw: &str) -> Result<String, &'static str> {
    let city = raw.trim();
    if city.is_empty() {
        return Err(EMPTY_CITY_MESSAGE);
    }
    Ok(city.to_owned())
}

/// App shell page.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let weather = expect_context::<RwSignal<WeatherState>>();

    let city = RwSignal::new(String::new());

    let on_search = Callback::new(move |()| {
        let city_value = match validate_city(&city.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                weather.update(|w| w.reject_input(message));
                return;
            }
        };
        let Some(token) = session.get_untracked().token().map(ToOwned::to_owned) else {
            return;
        };
        let ticket = weather.try_update(WeatherState::begin_lookup).unwrap_or_default();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::state::weather::CITY_LOOKUP_FAILED_MESSAGE;

            match crate::net::api::weather_by_city(&city_value, &token).await {
                Ok(report) => weather.update(|w| w.resolve(ticket, report)),
                Err(e) => {
                    leptos::logging::warn!("city weather lookup failed: {e}");
                    weather.update(|w| w.fail(ticket, CITY_LOOKUP_FAILED_MESSAGE));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (city_value, token, ticket);
        }
    });

    let on_locate = move |_| {
        let Some(token) = session.get_untracked().token().map(ToOwned::to_owned) else {
            return;
        };
        let ticket = weather.try_update(WeatherState::begin_lookup).unwrap_or_default();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::state::weather::{
                GEOLOCATION_UNSUPPORTED_MESSAGE, LOCATION_LOOKUP_FAILED_MESSAGE,
            };
            use crate::util::geolocation::{self, GeolocationError};

            let position = match geolocation::current_position().await {
                Ok(position) => position,
                Err(GeolocationError::Unsupported) => {
                    weather.update(|w| w.reject_input(GEOLOCATION_UNSUPPORTED_MESSAGE));
                    return;
                }
                Err(e) => {
                    leptos::logging::warn!("geolocation failed: {e}");
                    weather.update(|w| w.fail(ticket, LOCATION_LOOKUP_FAILED_MESSAGE));
                    return;
                }
            };
            match crate::net::api::weather_by_coordinates(
                position.latitude,
                position.longitude,
                &token,
            )
            .await
            {
                Ok(report) => weather.update(|w| w.resolve(ticket, report)),
                Err(e) => {
                    leptos::logging::warn!("location weather lookup failed: {e}");
                    weather.update(|w| w.fail(ticket, LOCATION_LOOKUP_FAILED_MESSAGE));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, ticket);
        }
    };

    let on_logout = move |_| {
        crate::util::session_store::clear_token();
        session.update(SessionState::clear);
    };

    view! {
        <div class="home-page">
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| view! { <AuthPanel/> }
            >
                <div class="weather-panel">
                    <header class="weather-panel__header">
                        <h1>"Skycast"</h1>
                        <button class="btn weather-panel__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </header>
                    <SearchBar value=city on_search=on_search/>
                    <button class="btn weather-panel__locate" on:click=on_locate>
                        "Get Current Location Weather"
                    </button>
                    <ErrorBanner message=Signal::derive(move || weather.get().error.clone())/>
                    <WeatherCard report=Signal::derive(move || weather.get().report.clone())/>
                </div>
            </Show>
        </div>
    }
}
