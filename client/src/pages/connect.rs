//! Letterboxd onboarding: CSV export upload and RSS feed linking.
//!
//! ARCHITECTURE
//! ============
//! The route is public, but both forms need a stored token; a missing token
//! is reported inline rather than redirecting. The two forms keep separate
//! loading flags and notices so one can be in flight while the other is used.

use leptos::prelude::*;

use crate::components::auth_gate::{AuthGate, Recovery};
use crate::state::auth::AuthState;
use crate::state::connect::{
    CsvHandle, CsvSlot, CsvSlots, FormNotice, NOT_AUTHENTICATED, continue_label, import_success_message,
    rss_success_message, validate_csv_submit, validate_rss_submit,
};
use crate::util::auth::use_auth;

#[component]
pub fn ConnectPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AuthGate auth=auth class="connect-page" recovery=Recovery::SignIn>
            <ConnectForms auth=auth />
        </AuthGate>
    }
}

#[component]
fn ConnectForms(auth: RwSignal<AuthState>) -> impl IntoView {
    // File handles are browser objects and stay on this thread.
    let slots = RwSignal::new_local(CsvSlots::<CsvHandle>::default());
    let csv_notice = RwSignal::new(FormNotice::None);
    let csv_loading = RwSignal::new(false);
    let rss_input = RwSignal::new(String::new());
    let rss_notice = RwSignal::new(FormNotice::None);
    let rss_loading = RwSignal::new(false);

    let token = move || auth.with_untracked(|a| a.ready_token().map(str::to_owned));

    let on_file_change = move |slot: CsvSlot, ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            use crate::state::connect::CsvSelection;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let selection = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| CsvSelection { file_name: file.name(), handle: file });
            slots.update(|s| s.set(slot, selection));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (slot, ev);
        }
        csv_notice.set(FormNotice::None);
    };

    let on_csv_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if csv_loading.get_untracked() {
            return;
        }
        let stored = token();
        let checked = slots.with_untracked(|s| validate_csv_submit(s, stored.as_deref()).map(str::to_owned));
        let token = match checked {
            Ok(token) => token,
            Err(message) => {
                csv_notice.set(FormNotice::Error(message.to_owned()));
                return;
            }
        };

        csv_notice.set(FormNotice::None);
        csv_loading.set(true);
        let files = slots.get_untracked();
        leptos::task::spawn_local(async move {
            let notice = match crate::net::api::import_letterboxd(&token, &files).await {
                Ok(summary) => FormNotice::Success(import_success_message(&summary)),
                Err(e) => FormNotice::Error(e.to_string()),
            };
            csv_notice.try_set(notice);
            csv_loading.try_set(false);
        });
    };

    let on_rss_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if rss_loading.get_untracked() {
            return;
        }
        let stored = token();
        let (rss, token) = match validate_rss_submit(&rss_input.get_untracked(), stored.as_deref()) {
            Ok((rss, token)) => (rss, token.to_owned()),
            Err(message) => {
                rss_notice.set(FormNotice::Error(message.to_owned()));
                return;
            }
        };

        rss_notice.set(FormNotice::None);
        rss_loading.set(true);
        leptos::task::spawn_local(async move {
            let notice = match crate::net::api::sync_rss(&token, &rss).await {
                Ok(summary) => FormNotice::Success(rss_success_message(&summary)),
                Err(e) => FormNotice::Error(e.to_string()),
            };
            rss_notice.try_set(notice);
            rss_loading.try_set(false);
        });
    };

    let slot_rows = CsvSlot::ALL
        .into_iter()
        .map(|slot| {
            let file_name = move || slots.with(|s| s.file_name(slot).map(str::to_owned));
            view! {
                <label class="csv-slot" class=("csv-slot--filled", move || file_name().is_some())>
                    <input
                        class="csv-slot__input"
                        type="file"
                        accept=".csv"
                        on:change=move |ev| on_file_change(slot, ev)
                    />
                    <span class="csv-slot__icon">{slot.icon()}</span>
                    <div class="csv-slot__info">
                        <div class="csv-slot__name">{slot.export_name()}</div>
                        <div class="csv-slot__detail">
                            {move || file_name().unwrap_or_else(|| slot.hint().to_owned())}
                        </div>
                    </div>
                    <span class="csv-slot__status">{move || if file_name().is_some() { "✅" } else { "＋" }}</span>
                </label>
            }
        })
        .collect::<Vec<_>>();

    // A stale or missing token is the one failure the user can fix here.
    let needs_sign_in = move || {
        [csv_notice.get(), rss_notice.get()]
            .iter()
            .any(|n| matches!(n, FormNotice::Error(m) if m == NOT_AUTHENTICATED))
    };

    view! {
        <div class="connect-page">
            <div class="connect-page__backdrop"></div>
            <div class="connect-card">
                <h1 class="connect-card__title">"CONNECT LETTERBOXD"</h1>
                <p class="connect-card__subtitle">
                    "Import your export files for all-time stats, then link your RSS feed for weekly reports."
                </p>

                <section class="connect-card__section">
                    <h2 class="connect-card__heading">"1. Upload your export"</h2>
                    <p class="connect-card__hint">
                        "Letterboxd → Settings → Import & Export → Export Your Data, then pick the CSV files below."
                    </p>
                    <form class="connect-card__form" on:submit=on_csv_submit>
                        <div class="csv-slots">{slot_rows}</div>
                        <NoticeBanner notice=csv_notice />
                        <button class="connect-card__submit" type="submit" disabled=move || csv_loading.get()>
                            {move || if csv_loading.get() { "IMPORTING…" } else { "IMPORT DATA" }}
                        </button>
                    </form>
                </section>

                <section class="connect-card__section">
                    <h2 class="connect-card__heading">"2. Link your RSS feed"</h2>
                    <p class="connect-card__hint">"Your username or profile URL, e.g. letterboxd.com/you"</p>
                    <form class="connect-card__form" on:submit=on_rss_submit>
                        <input
                            class="connect-card__input"
                            type="text"
                            placeholder="username or https://letterboxd.com/username/"
                            prop:value=move || rss_input.get()
                            on:input=move |ev| {
                                rss_input.set(event_target_value(&ev));
                                if matches!(rss_notice.get_untracked(), FormNotice::Error(_)) {
                                    rss_notice.set(FormNotice::None);
                                }
                            }
                        />
                        <NoticeBanner notice=rss_notice />
                        <button class="connect-card__submit" type="submit" disabled=move || rss_loading.get()>
                            {move || if rss_loading.get() { "LINKING…" } else { "LINK RSS" }}
                        </button>
                    </form>
                </section>

                <Show when=needs_sign_in>
                    <a class="connect-card__signin" href="/signin">
                        "GO TO SIGN IN"
                    </a>
                </Show>

                <a class="connect-card__continue" href="/chat">
                    {move || continue_label(&csv_notice.get(), &rss_notice.get())}
                </a>
            </div>
        </div>
    }
}

#[component]
fn NoticeBanner(notice: RwSignal<FormNotice>) -> impl IntoView {
    move || match notice.get() {
        FormNotice::None => None,
        FormNotice::Error(message) => {
            Some(view! { <div class="notice notice--error">{message}</div> }.into_any())
        }
        FormNotice::Success(message) => {
            Some(view! { <div class="notice notice--success">{message}</div> }.into_any())
        }
    }
}
