use super::*;

// =============================================================
// Credential validation
// =============================================================

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  a@b.com  ", "pw"),
        Ok(("a@b.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_email() {
    assert_eq!(validate_credentials("   ", "pw"), Err(EMPTY_CREDENTIALS_NOTICE));
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(validate_credentials("a@b.com", ""), Err(EMPTY_CREDENTIALS_NOTICE));
}

#[test]
fn validate_credentials_keeps_password_verbatim() {
    assert_eq!(
        validate_credentials("a@b.com", " p w "),
        Ok(("a@b.com".to_owned(), " p w ".to_owned()))
    );
}
