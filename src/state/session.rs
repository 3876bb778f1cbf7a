//! The session context: token presence decides the authenticated view.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionState` is provided at the top of the view tree; everything
//! that reads or writes the session goes through it instead of reaching for
//! `localStorage` directly. Persistence lives in `util::session_store`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// In-memory session for the current browser user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    /// Rebuild the session from whatever the token store held at app start.
    ///
    /// Policy: a present token is trusted as a valid session. No server-side
    /// verification happens on this path; an expired token stays
    /// "authenticated" until a backend call rejects it and the user logs out.
    pub fn restore(stored: Option<String>) -> Self {
        Self { token: stored }
    }

    /// Transition to authenticated with a freshly issued token.
    pub fn establish(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Transition to unauthenticated (logout).
    pub fn clear(&mut self) {
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The session token to attach to backend requests.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
