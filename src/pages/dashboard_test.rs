use super::*;

// =============================================================
// Folding provider notifications
// =============================================================

#[test]
fn auth_after_change_marks_loading_finished() {
    let state = auth_after_change(None);
    assert!(!state.loading);
}

#[test]
fn signed_out_notification_triggers_redirect() {
    let state = auth_after_change(None);
    assert!(should_redirect_unauth(&state));
}

#[test]
fn signed_in_notification_keeps_the_user() {
    let state = auth_after_change(Some(User {
        email: "a@b.com".to_owned(),
    }));
    assert!(!should_redirect_unauth(&state));
    assert_eq!(state.user.map(|u| u.email), Some("a@b.com".to_owned()));
}
