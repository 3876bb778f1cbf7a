//! Inline banner for the current failure message.

use leptos::prelude::*;

/// Renders nothing while `message` is absent, otherwise the message text.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .filter(|m| !m.is_empty())
            .map(|m| view! { <div class="error-banner">{m}</div> })
    }
}
