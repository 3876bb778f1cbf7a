//! Client-side facade over the external identity provider's session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider owns the authoritative "who is signed in" record. Pages that
//! care about identity subscribe to change notifications instead of polling;
//! the dashboard is the main consumer. Subscriptions are released
//! deterministically when the page tears down.
//!
//! The facade is deliberately synchronous and in-memory: the backend issues
//! the session token, and this type only mirrors the identity attached to it.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

use super::types::User;

type ChangeHandler = Arc<dyn Fn(Option<&User>) + Send + Sync>;

#[derive(Default)]
struct ProviderInner {
    user: Option<User>,
    next_subscription: u64,
    handlers: Vec<(u64, ChangeHandler)>,
}

/// Identity-provider session mirror with change notifications.
///
/// Cloning is cheap and every clone observes the same session.
#[derive(Clone, Default)]
pub struct IdentityProvider {
    inner: Arc<Mutex<ProviderInner>>,
}

impl IdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for auth-state changes.
    ///
    /// The current state is replayed to the handler immediately, then the
    /// handler fires on every subsequent change until the returned
    /// subscription is dropped or [`AuthSubscription::cancel`]ed.
    pub fn subscribe(
        &self,
        handler: impl Fn(Option<&User>) + Send + Sync + 'static,
    ) -> AuthSubscription {
        let handler: ChangeHandler = Arc::new(handler);
        let (id, snapshot) = {
            let mut inner = self.lock();
            let id = inner.next_subscription;
            inner.next_subscription += 1;
            inner.handlers.push((id, handler.clone()));
            (id, inner.user.clone())
        };
        handler(snapshot.as_ref());
        AuthSubscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Mirror a successful login/signup into the provider and notify
    /// subscribers.
    pub fn signed_in(&self, user: User) {
        self.lock().user = Some(user);
        self.notify();
    }

    /// Provider sign-out: clear the identity and notify subscribers.
    ///
    /// Does not touch the stored backend token; the session store is managed
    /// by the app shell.
    pub fn sign_out(&self) {
        self.lock().user = None;
        self.notify();
    }

    /// The identity currently attached to the provider session, if any.
    pub fn current_user(&self) -> Option<User> {
        self.lock().user.clone()
    }

    /// Invoke every live handler with the current state.
    ///
    /// Handlers run outside the lock so they may call back into the provider.
    fn notify(&self) {
        let (user, handlers) = {
            let inner = self.lock();
            let handlers: Vec<ChangeHandler> =
                inner.handlers.iter().map(|(_, h)| h.clone()).collect();
            (inner.user.clone(), handlers)
        };
        for handler in handlers {
            handler(user.as_ref());
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ProviderInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle for one registered change handler.
///
/// Dropping the handle unregisters the handler; `cancel` does the same with
/// an explicit name for teardown sites.
pub struct AuthSubscription {
    id: u64,
    inner: Weak<Mutex<ProviderInner>>,
}

impl AuthSubscription {
    /// Release the subscription now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.handlers.retain(|(id, _)| *id != self.id);
        }
    }
}
