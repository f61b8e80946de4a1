//! Weekly statistics rendered as scrolling end credits.
//!
//! ARCHITECTURE
//! ============
//! The report is fetched once the session check confirms a token. "Roll
//! Credits" drives the scrollport from a frame loop owned by
//! `util::frame_loop`; each start gets a fresh generation so stopping and
//! restarting never leaves two loops running.

use leptos::prelude::*;

use crate::components::auth_gate::{AuthGate, Recovery};
use crate::components::credits::{BarChart, Credited, CreditedList, DecadeSection};
use crate::net::types::StatsReport;
use crate::state::auth::AuthState;
use crate::state::credits::{CreditsReel, ReelCommand, StatsLoad, reel_label};
use crate::util::auth::use_auth;
use crate::util::frame_loop::run_reel;
use crate::util::stats_view::percent_change_label;

#[component]
pub fn StatsPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AuthGate auth=auth class="credits-page" recovery=Recovery::Retry>
            <CreditsScreen auth=auth />
        </AuthGate>
    }
}

#[component]
fn CreditsScreen(auth: RwSignal<AuthState>) -> impl IntoView {
    let load = RwSignal::new(StatsLoad::Loading);
    let reel = RwSignal::new(CreditsReel::default());
    let port = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        // A tokenless session is already being redirected to sign in.
        let Some(token) = auth.with(|a| a.ready_token().map(str::to_owned)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_stats(&token).await;
            #[cfg(feature = "hydrate")]
            if let Err(e) = &result {
                log::error!("stats fetch failed: {e}");
            }
            load.try_set(StatsLoad::from_result(result));
        });
    });

    on_cleanup(move || {
        reel.try_update(CreditsReel::halt);
    });

    let on_toggle = move |_| {
        if let Some(ReelCommand::Start(generation)) = reel.try_update(CreditsReel::toggle) {
            run_reel(reel, port, generation);
        }
    };

    view! {
        <div class="credits-page">
            <div class="credits-page__fade credits-page__fade--top"></div>
            <div class="credits-page__fade credits-page__fade--bottom"></div>
            <div class="credits-page__scrollport" node_ref=port>
                {move || match load.get() {
                    StatsLoad::Loading => view! {
                        <div class="credits-page__status">"Generating your film report..."</div>
                    }
                    .into_any(),
                    StatsLoad::Failed(message) => view! {
                        <div class="credits-page__status credits-page__status--error">{message}</div>
                    }
                    .into_any(),
                    StatsLoad::Loaded(report) => view! { <CreditsStage report=report /> }.into_any(),
                }}
            </div>
            <Show when=move || matches!(load.get(), StatsLoad::Loaded(_))>
                <div class="credits-page__controls">
                    <button class="credits-page__toggle" on:click=on_toggle>
                        {move || reel_label(reel.with(CreditsReel::is_playing))}
                    </button>
                    <a class="credits-page__back" href="/chat">
                        "Back to chat"
                    </a>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CreditsStage(report: StatsReport) -> impl IntoView {
    let StatsReport {
        total_watches,
        percent_change,
        days,
        this_week,
        last_week,
        directors,
        actors,
        genres,
        recent_films,
        by_decade,
    } = report;

    view! {
        <div class="credits-stage">
            <div class="credits-stage__lead">"Your week in film"</div>
            <Credited>
                <div class="credits-stage__headline">
                    <div class="credits-stage__label">"Films watched"</div>
                    <div class="credits-stage__total">{total_watches}</div>
                    <div class="credits-stage__unit">"this week"</div>
                    <div class="credits-stage__change">{percent_change_label(percent_change)}</div>
                </div>
            </Credited>
            <div class="credits-stage__rule"></div>
            <BarChart days=days this_week=this_week last_week=last_week />
            <div class="credits-stage__rule"></div>
            <CreditedList header="Top Director" items=directors />
            <CreditedList header="Top Actor" items=actors />
            <CreditedList header="Top Genre" items=genres />
            <CreditedList header="Most Recent" items=recent_films />
            <DecadeSection decades=by_decade />
            <div class="credits-stage__fin">"— fin —"</div>
        </div>
    }
}
