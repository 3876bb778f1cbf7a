//! Static page footer.

use leptos::prelude::*;

/// Fixed footer content; takes no inputs.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>
                "Skycast, a "
                <strong>"single-page weather lookup"</strong>
            </p>
            <p>"Weather data served by the local backend API."</p>
        </footer>
    }
}
