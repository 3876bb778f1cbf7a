//! Login and signup forms with a toggle between the two.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::provider::IdentityProvider;
use crate::state::auth::AuthScreen;
use crate::state::session::SessionState;
use crate::util::auth::install_authenticated_redirect;

/// Inline notice when either credential field is empty; no request is sent.
pub const EMPTY_CREDENTIALS_NOTICE: &str = "Enter both email and password.";

/// Trim the email and require both fields before a request goes out.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(EMPTY_CREDENTIALS_NOTICE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Standalone login route.
///
/// The dashboard redirects signed-out visitors here; anyone who is already
/// authenticated is bounced back to the shell.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_authenticated_redirect(session, navigate);

    view! {
        <div class="login-page">
            <h1>"Skycast"</h1>
            <AuthPanel/>
        </div>
    }
}

/// Login/signup switcher.
///
/// Switching screens recreates the form component, so no field input
/// survives a toggle.
#[component]
pub fn AuthPanel() -> impl IntoView {
    let screen = RwSignal::new(AuthScreen::default());

    view! {
        <div class="auth-panel">
            {move || match screen.get() {
                AuthScreen::Login => view! { <CredentialsForm mode=AuthScreen::Login/> }.into_any(),
                AuthScreen::Signup => {
                    view! { <CredentialsForm mode=AuthScreen::Signup/> }.into_any()
                }
            }}
            <button
                class="auth-panel__toggle"
                on:click=move |_| screen.update(|s| *s = s.toggled())
            >
                {move || screen.get().toggle_label()}
            </button>
        </div>
    }
}

/// One credentials form, submitting to `/login` or `/signup` per `mode`.
///
/// On success the issued token is persisted, the session context flips to
/// authenticated, and the identity is mirrored into the provider. On failure
/// a generic notice shows and all state stays as it was.
#[component]
fn CredentialsForm(mode: AuthScreen) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let provider = expect_context::<IdentityProvider>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    notice.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        notice.set(String::new());

        #[cfg(feature = "csr")]
        {
            let provider = provider.clone();
            leptos::task::spawn_local(async move {
                use crate::net::types::User;

                let outcome = match mode {
                    AuthScreen::Login => {
                        crate::net::api::login(&email_value, &password_value).await
                    }
                    AuthScreen::Signup => {
                        crate::net::api::signup(&email_value, &password_value).await
                    }
                };
                match outcome {
                    Ok(token) => {
                        crate::util::session_store::save_token(&token);
                        session.update(|s| s.establish(token));
                        provider.signed_in(User { email: email_value });
                    }
                    Err(e) => {
                        leptos::logging::warn!("{} request failed: {e}", mode.title());
                        notice.set(mode.failure_notice().to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value, &provider);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-form">
            <h2>{mode.title()}</h2>
            <form class="auth-form__fields" on:submit=on_submit>
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {mode.title()}
                </button>
            </form>
            <Show when=move || !notice.get().is_empty()>
                <p class="auth-form__notice">{move || notice.get()}</p>
            </Show>
        </div>
    }
}
