#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn load_token_is_none_off_browser() {
    assert_eq!(load_token(), None);
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    save_token("T1");
    clear_token();
    assert_eq!(load_token(), None);
}
