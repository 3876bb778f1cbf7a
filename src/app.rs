//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::net::provider::IdentityProvider;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage};
use crate::state::{session::SessionState, weather::WeatherState};

/// Root application component.
///
/// Restores the stored session (a present token is trusted without
/// verification), provides the shared contexts, and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore(
        crate::util::session_store::load_token(),
    ));
    let weather = RwSignal::new(WeatherState::default());
    let provider = IdentityProvider::new();

    provide_context(session);
    provide_context(weather);
    provide_context(provider);

    view! {
        <Title text="Skycast"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>

        <Footer/>
    }
}
