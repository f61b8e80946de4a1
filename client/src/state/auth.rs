//! Auth-session state for the current page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded page runs the same mount-time check (`util::auth::use_auth`)
//! and renders one of three phases: still checking, server unavailable, or
//! ready. The decision logic lives here as plain functions so it can be
//! tested without a router or a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{PingOutcome, SERVER_UNAVAILABLE};
use crate::net::types::PingUser;

/// Routes reachable without a stored token.
pub const PUBLIC_ROUTES: [&str; 3] = ["/signin", "/signup", "/connect"];

pub const SIGN_IN_ROUTE: &str = "/signin";

/// Where the mount-time check currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Authenticating,
    /// Check finished; the page may render. The token may still be absent on
    /// public routes.
    Ready,
    /// The server could not confirm the session either way.
    Unavailable(String),
}

/// Authentication state for a guarded page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub token: Option<String>,
}

impl AuthState {
    /// State before the check runs, carrying whatever token is stored.
    #[must_use]
    pub fn checking(token: Option<String>) -> Self {
        Self { phase: AuthPhase::Authenticating, token }
    }

    #[must_use]
    pub fn is_authenticating(&self) -> bool {
        self.phase == AuthPhase::Authenticating
    }

    /// Token to use for API calls, only once the check has passed.
    #[must_use]
    pub fn ready_token(&self) -> Option<&str> {
        match self.phase {
            AuthPhase::Ready => self.token.as_deref(),
            _ => None,
        }
    }
}

/// What the guard should do once the ping answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthResolution {
    /// Keep the token, refresh the stored identity.
    Confirmed(PingUser),
    /// Token is dead: clear the session and send the user to sign in.
    SignedOut,
    /// Show the retry prompt.
    Unavailable(String),
}

#[must_use]
pub fn resolve_ping(outcome: PingOutcome) -> AuthResolution {
    match outcome {
        PingOutcome::Authenticated(user) => AuthResolution::Confirmed(user),
        PingOutcome::Rejected => AuthResolution::SignedOut,
        PingOutcome::Unavailable => AuthResolution::Unavailable(SERVER_UNAVAILABLE.to_owned()),
    }
}

/// Apply a resolution to the page state. Returns the new state.
#[must_use]
pub fn apply_resolution(state: &AuthState, resolution: &AuthResolution) -> AuthState {
    match resolution {
        AuthResolution::Confirmed(_) => AuthState { phase: AuthPhase::Ready, token: state.token.clone() },
        AuthResolution::SignedOut => AuthState { phase: AuthPhase::Ready, token: None },
        AuthResolution::Unavailable(message) => {
            AuthState { phase: AuthPhase::Unavailable(message.clone()), token: state.token.clone() }
        }
    }
}

/// Whether `path` needs a token. Trailing slashes are ignored.
#[must_use]
pub fn requires_sign_in(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    !PUBLIC_ROUTES.contains(&normalized)
}
