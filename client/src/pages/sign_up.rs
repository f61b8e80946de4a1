//! Account creation page; a new account goes straight to chat.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::pages::sign_in::credential_submit;
use crate::util::auth_form::AuthMode;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let on_submit = credential_submit(AuthMode::SignUp, error, loading);

    view! { <AuthForm mode=AuthMode::SignUp on_submit=on_submit error=error loading=loading /> }
}
