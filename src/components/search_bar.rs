//! City search input with a submit button.

use leptos::prelude::*;

/// Text field plus "Get Weather" button; submits delegate to the
/// caller-supplied handler.
#[component]
pub fn SearchBar(value: RwSignal<String>, on_search: Callback<()>) -> impl IntoView {
    view! {
        <form
            class="search-bar"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_search.run(());
            }
        >
            <input
                class="search-bar__input"
                type="text"
                placeholder="Enter city"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button class="btn btn--primary search-bar__button" type="submit">
                "Get Weather"
            </button>
        </form>
    }
}
