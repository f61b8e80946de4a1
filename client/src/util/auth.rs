//! Shared auth guard for routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical session-check and redirect
//! behavior, so the mount-time ping lives in one hook.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::{AuthPhase, AuthResolution, AuthState, SIGN_IN_ROUTE, apply_resolution, requires_sign_in, resolve_ping};
use crate::state::session::Session;

/// Run the session check for the current page.
///
/// Without a stored token the page becomes ready immediately and, unless the
/// route is public, redirects to sign in. With a token, `/api/ping/` decides:
/// confirmed identities are written back to storage, rejected tokens clear
/// the session and redirect, anything else leaves the page in
/// `AuthPhase::Unavailable`.
pub fn use_auth() -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::default());
    let navigate = use_navigate();
    let location = use_location();

    // Effects only run in the browser, so SSR always renders the
    // authenticating state and hydration starts from the same markup.
    Effect::new(move || {
        let session = Session::browser();
        let path = location.pathname.get_untracked();

        let Some(token) = session.access_token() else {
            auth.set(AuthState { phase: AuthPhase::Ready, token: None });
            if requires_sign_in(&path) {
                navigate(SIGN_IN_ROUTE, NavigateOptions::default());
            }
            return;
        };

        auth.set(AuthState::checking(Some(token.clone())));
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let resolution = resolve_ping(crate::net::api::ping(&token).await);
            match &resolution {
                AuthResolution::Confirmed(user) => session.store_identity(&user.username, user.id),
                AuthResolution::SignedOut => session.clear(),
                AuthResolution::Unavailable(_) => {}
            }

            // The page may have been left while the ping was in flight.
            let Some(current) = auth.try_get_untracked() else {
                return;
            };
            auth.try_set(apply_resolution(&current, &resolution));
            if matches!(resolution, AuthResolution::SignedOut) {
                navigate(SIGN_IN_ROUTE, NavigateOptions::default());
            }
        });
    });

    auth
}

/// Reload the current document; the retry action for an unavailable server.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
