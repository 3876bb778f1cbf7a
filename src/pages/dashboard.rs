//! Dashboard page driven by identity-provider notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! This route trusts the provider, not the stored backend token: it
//! subscribes to auth-state changes on mount, redirects to `/login` whenever
//! a notification carries no user, and tears the subscription down when the
//! page unmounts. Its logout goes through the provider sign-out, whose
//! notification then triggers the redirect.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::provider::IdentityProvider;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::auth::should_redirect_unauth;

/// Fold one provider notification into the page's auth mirror.
fn auth_after_change(user: Option<User>) -> AuthState {
    AuthState {
        user,
        loading: false,
    }
}

/// Dashboard page; shows a loading placeholder until the first provider
/// notification lands.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let provider = expect_context::<IdentityProvider>();
    let navigate = use_navigate();

    let auth = RwSignal::new(AuthState {
        user: None,
        loading: true,
    });
    // Latest provider notification; the redirect decision runs in an effect.
    let last_change = RwSignal::new(None::<Option<User>>);

    let subscription = provider.subscribe(move |user| {
        last_change.set(Some(user.cloned()));
    });
    on_cleanup(move || subscription.cancel());

    Effect::new(move || {
        let Some(user) = last_change.get() else {
            return;
        };
        let state = auth_after_change(user);
        let redirect = should_redirect_unauth(&state);
        auth.set(state);
        if redirect {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_sign_out = {
        let provider = provider.clone();
        move |_| provider.sign_out()
    };

    view! {
        <div class="dashboard-page">
            <h2>"Dashboard"</h2>
            {move || {
                auth.get()
                    .user
                    .map_or_else(
                        || view! { <p class="dashboard-page__loading">"Loading..."</p> }.into_any(),
                        |user| {
                            view! {
                                <p class="dashboard-page__welcome">
                                    "Welcome, " {user.email} "!"
                                </p>
                            }
                                .into_any()
                        },
                    )
            }}
            <button class="btn dashboard-page__logout" on:click=on_sign_out>
                "Logout"
            </button>
        </div>
    }
}
