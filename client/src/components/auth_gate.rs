//! Placeholder screens shown while a page's session check is outstanding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page that calls `use_auth` wraps its content in `AuthGate`,
//! which keeps the real page unmounted until the check settles.

use leptos::prelude::*;

use crate::state::auth::{AuthPhase, AuthState, SIGN_IN_ROUTE};
use crate::util::auth::reload_page;

/// What the unavailable screen offers the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery {
    /// Reload the page and try the ping again.
    Retry,
    /// Leave for the sign-in screen.
    SignIn,
}

#[component]
pub fn AuthGate(
    auth: RwSignal<AuthState>,
    #[prop(into)] class: String,
    recovery: Recovery,
    children: ChildrenFn,
) -> impl IntoView {
    let phase = Memo::new(move |_| auth.with(|a| a.phase.clone()));

    move || match phase.get() {
        AuthPhase::Authenticating => view! {
            <div class=class.clone()>
                <div class="auth-gate">
                    <p class="auth-gate__message">"Authenticating..."</p>
                </div>
            </div>
        }
        .into_any(),
        AuthPhase::Unavailable(message) => {
            let action = match recovery {
                Recovery::Retry => view! {
                    <button class="auth-gate__action" on:click=move |_| reload_page()>
                        "RETRY"
                    </button>
                }
                .into_any(),
                Recovery::SignIn => view! {
                    <a class="auth-gate__action" href=SIGN_IN_ROUTE>
                        "GO TO SIGN IN"
                    </a>
                }
                .into_any(),
            };
            view! {
                <div class=class.clone()>
                    <div class="auth-gate">
                        <p class="auth-gate__error">{message}</p>
                        {action}
                    </div>
                </div>
            }
            .into_any()
        }
        AuthPhase::Ready => children().into_any(),
    }
}
