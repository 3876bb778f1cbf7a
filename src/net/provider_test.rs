use super::*;

use std::sync::Mutex as StdMutex;

fn recorder() -> (Arc<StdMutex<Vec<Option<String>>>>, impl Fn(Option<&User>) + Send + Sync) {
    let seen = Arc::new(StdMutex::new(Vec::new()));
    let sink = seen.clone();
    let handler = move |user: Option<&User>| {
        let email = user.map(|u| u.email.clone());
        sink.lock().unwrap().push(email);
    };
    (seen, handler)
}

fn user(email: &str) -> User {
    User {
        email: email.to_owned(),
    }
}

// =============================================================
// Subscription lifecycle
// =============================================================

#[test]
fn subscribe_replays_current_state_immediately() {
    let provider = IdentityProvider::new();
    let (seen, handler) = recorder();
    let _sub = provider.subscribe(handler);
    assert_eq!(seen.lock().unwrap().as_slice(), &[None]);
}

#[test]
fn subscribe_after_sign_in_replays_the_user() {
    let provider = IdentityProvider::new();
    provider.signed_in(user("a@b.com"));
    let (seen, handler) = recorder();
    let _sub = provider.subscribe(handler);
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[Some("a@b.com".to_owned())]
    );
}

#[test]
fn signed_in_notifies_live_subscription() {
    let provider = IdentityProvider::new();
    let (seen, handler) = recorder();
    let _sub = provider.subscribe(handler);
    provider.signed_in(user("a@b.com"));
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[None, Some("a@b.com".to_owned())]
    );
}

#[test]
fn sign_out_notifies_with_no_user() {
    let provider = IdentityProvider::new();
    provider.signed_in(user("a@b.com"));
    let (seen, handler) = recorder();
    let _sub = provider.subscribe(handler);
    provider.sign_out();
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[Some("a@b.com".to_owned()), None]
    );
    assert_eq!(provider.current_user(), None);
}

#[test]
fn cancelled_subscription_receives_nothing_further() {
    let provider = IdentityProvider::new();
    let (seen, handler) = recorder();
    let sub = provider.subscribe(handler);
    sub.cancel();
    provider.signed_in(user("a@b.com"));
    assert_eq!(seen.lock().unwrap().as_slice(), &[None]);
}

#[test]
fn dropping_subscription_unregisters_handler() {
    let provider = IdentityProvider::new();
    let (seen, handler) = recorder();
    {
        let _sub = provider.subscribe(handler);
    }
    provider.sign_out();
    assert_eq!(seen.lock().unwrap().as_slice(), &[None]);
}

#[test]
fn multiple_subscribers_all_observe_changes() {
    let provider = IdentityProvider::new();
    let (seen_a, handler_a) = recorder();
    let (seen_b, handler_b) = recorder();
    let _sub_a = provider.subscribe(handler_a);
    let _sub_b = provider.subscribe(handler_b);
    provider.signed_in(user("a@b.com"));
    assert_eq!(seen_a.lock().unwrap().len(), 2);
    assert_eq!(seen_b.lock().unwrap().len(), 2);
}

// =============================================================
// Shared session across clones
// =============================================================

#[test]
fn clones_observe_the_same_session() {
    let provider = IdentityProvider::new();
    let clone = provider.clone();
    provider.signed_in(user("a@b.com"));
    assert_eq!(clone.current_user(), Some(user("a@b.com")));
}

#[test]
fn handler_may_read_provider_state_reentrantly() {
    let provider = IdentityProvider::new();
    let probe = provider.clone();
    let seen = Arc::new(StdMutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = provider.subscribe(move |_| {
        sink.lock().unwrap().push(probe.current_user());
    });
    provider.signed_in(user("a@b.com"));
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[None, Some(user("a@b.com"))]
    );
}
