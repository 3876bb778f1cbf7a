//! `localStorage` persistence for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives under one fixed key for the lifetime of the session:
//! written on login/signup, read once at app start, removed on logout. All
//! other code goes through the session context instead of touching storage.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

#[cfg(feature = "csr")]
const TOKEN_STORAGE_KEY: &str = "skycast_auth_token";

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored session token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the session token.
pub fn save_token(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Delete the stored session token.
pub fn clear_token() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}
