//! Sign-in page plus the submit flow it shares with sign-up.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_form::AuthForm;
use crate::net::types::Credentials;
use crate::state::session::Session;
use crate::util::auth_form::AuthMode;

/// Build the submit callback for a credential form.
///
/// A successful call stores the token and username and moves on to the
/// mode's landing route; a failure surfaces the server's message through
/// `error`. `loading` is held for the whole round trip.
pub(crate) fn credential_submit(
    mode: AuthMode,
    error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
) -> Callback<Credentials> {
    let navigate = use_navigate();
    Callback::new(move |credentials: Credentials| {
        error.set(None);
        loading.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match mode {
                AuthMode::SignIn => crate::net::api::login(&credentials).await,
                AuthMode::SignUp => crate::net::api::register(&credentials).await,
            };
            match result {
                Ok(token) => {
                    Session::browser().store_login(&token, &credentials.username);
                    loading.try_set(false);
                    navigate(mode.success_route(), NavigateOptions::default());
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                    loading.try_set(false);
                }
            }
        });
    })
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let on_submit = credential_submit(AuthMode::SignIn, error, loading);

    view! { <AuthForm mode=AuthMode::SignIn on_submit=on_submit error=error loading=loading /> }
}
