//! Auth view state: the login/signup toggle and the dashboard's identity
//! mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell derives "authenticated" from the session context; the types
//! here cover the two unauthenticated screens and the provider-driven
//! identity record the dashboard renders.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Identity mirror for provider-driven pages.
///
/// `loading` is true until the first provider notification lands.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

/// Which unauthenticated screen the shell shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthScreen {
    #[default]
    Login,
    Signup,
}

impl AuthScreen {
    /// The other screen. Switching recreates the form, so no field input
    /// survives a toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    /// Label for the screen's heading and submit button.
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
        }
    }

    /// Label for the button that switches to the other screen.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account? Sign Up",
            Self::Signup => "Already have an account? Login",
        }
    }

    /// Generic notice shown when this screen's request fails.
    pub fn failure_notice(self) -> &'static str {
        match self {
            Self::Login => "Login failed, please try again.",
            Self::Signup => "Signup failed, please try again.",
        }
    }
}
