//! Username/password card shared by the sign-in and sign-up screens.

use leptos::prelude::*;

use crate::net::types::Credentials;
use crate::util::auth_form::{AuthMode, validate_credentials};

/// Credential form. Local validation runs before `on_submit` fires, so the
/// page only ever sees well-formed credentials.
#[component]
pub fn AuthForm(
    mode: AuthMode,
    on_submit: Callback<Credentials>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let invalid = RwSignal::new(None::<&'static str>);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let checked = validate_credentials(
            mode,
            &username.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        );
        match checked {
            Ok(credentials) => {
                invalid.set(None);
                on_submit.run(credentials);
            }
            Err(message) => invalid.set(Some(message)),
        }
    };

    let message = move || invalid.get().map(str::to_owned).or_else(|| error.get());
    let (prompt, link_text, link_href) = mode.switch_link();

    view! {
        <div class="auth-page">
            <div class="auth-page__backdrop"></div>
            <div class="auth-card">
                <h2 class="auth-card__title">{mode.title()}</h2>
                <Show when=move || message().is_some()>
                    <div class="auth-card__error">{move || message().unwrap_or_default()}</div>
                </Show>
                <form class="auth-card__form" on:submit=on_form_submit>
                    <label class="auth-card__field">
                        <span>"USERNAME"</span>
                        <input
                            class="auth-card__input"
                            type="text"
                            autocomplete="username"
                            placeholder="Enter username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__field">
                        <span>"PASSWORD"</span>
                        <input
                            class="auth-card__input"
                            type="password"
                            placeholder="Enter password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {(mode == AuthMode::SignUp)
                        .then(|| {
                            view! {
                                <label class="auth-card__field">
                                    <span>"CONFIRM PASSWORD"</span>
                                    <input
                                        class="auth-card__input"
                                        type="password"
                                        placeholder="Confirm password"
                                        prop:value=move || confirm.get()
                                        on:input=move |ev| confirm.set(event_target_value(&ev))
                                    />
                                </label>
                            }
                        })}
                    <button class="auth-card__submit" type="submit" disabled=move || loading.get()>
                        {mode.submit_label()}
                    </button>
                </form>
                <p class="auth-card__switch">
                    {prompt}
                    " "
                    <a class="auth-card__link" href=link_href>
                        {link_text}
                    </a>
                </p>
            </div>
        </div>
    }
}
