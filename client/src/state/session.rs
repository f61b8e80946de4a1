//! The persisted browser session: bearer token plus display identity.
//!
//! DESIGN
//! ======
//! The server is the only authority on whether a token is valid, so nothing
//! here tracks expiry. A token is written on sign in / sign up and removed
//! only when the ping check is answered with 401/403.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::{BrowserStorage, KeyValueStore};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USERNAME_KEY: &str = "username";
pub const USER_ID_KEY: &str = "userId";

/// Typed view over the three session keys.
#[derive(Clone, Debug, Default)]
pub struct Session<S> {
    store: S,
}

impl Session<BrowserStorage> {
    /// Session backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self { store: BrowserStorage }
    }
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored bearer token; blank values count as absent.
    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    pub fn username(&self) -> Option<String> {
        self.store.get(USERNAME_KEY)
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.get(USER_ID_KEY)
    }

    /// Persist a freshly issued token together with the name the user typed.
    pub fn store_login(&self, token: &str, username: &str) {
        self.store.set(ACCESS_TOKEN_KEY, token);
        self.store.set(USERNAME_KEY, username);
    }

    /// Record the identity the server resolved for the current token.
    pub fn store_identity(&self, username: &str, user_id: i64) {
        self.store.set(USERNAME_KEY, username);
        self.store.set(USER_ID_KEY, &user_id.to_string());
    }

    /// Forget everything; the next guarded page sends the user to sign in.
    pub fn clear(&self) {
        for key in [ACCESS_TOKEN_KEY, USERNAME_KEY, USER_ID_KEY] {
            self.store.remove(key);
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
