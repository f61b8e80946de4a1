//! Sections of the end-credits statistics report.
//!
//! Each section fades in the first time it scrolls into view.

use leptos::prelude::*;

use crate::net::types::{DecadeCount, RankedName};
use crate::util::frame_loop::reveal_when_visible;
use crate::util::stats_view::{CHART_LABEL, DECADE_HEADER, day_bars, decade_width_pct, max_of, ranked_rows};

/// Wrapper that reveals its children on first sight.
#[component]
pub fn Credited(children: Children) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let visible = RwSignal::new(false);
    reveal_when_visible(node, visible);

    view! {
        <div class="credited" class=("credited--visible", move || visible.get()) node_ref=node>
            {children()}
        </div>
    }
}

/// A "Top Director" style block listing up to five ranked names.
#[component]
pub fn CreditedList(header: &'static str, items: Vec<RankedName>) -> impl IntoView {
    let rows = ranked_rows(&items)
        .into_iter()
        .map(|(ordinal, name)| {
            view! {
                <li class="credits-list__row">
                    <span class="credits-list__ordinal">{ordinal}</span>
                    <span class="credits-list__name">{name}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Credited>
            <div class="credits-list">
                <div class="credits-list__header">{header}</div>
                <ul class="credits-list__rows">{rows}</ul>
            </div>
        </Credited>
    }
}

#[component]
pub fn DecadeSection(decades: Vec<DecadeCount>) -> impl IntoView {
    let counts = decades.iter().map(|d| d.count).collect::<Vec<_>>();
    let max = max_of(&counts);
    let rows = decades
        .into_iter()
        .map(|decade| {
            let width = format!("{:.1}%", decade_width_pct(decade.count, max));
            view! {
                <div class="decades__row">
                    <span class="decades__label">{decade.label}</span>
                    <div class="decades__track">
                        <div class="decades__fill" style:width=width></div>
                    </div>
                    <span class="decades__count">{decade.count}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Credited>
            <div class="decades">
                <div class="credits-list__header">{DECADE_HEADER}</div>
                {rows}
            </div>
        </Credited>
    }
}

/// Day-by-day chart comparing this week against last week.
#[component]
pub fn BarChart(days: Vec<String>, this_week: Vec<u32>, last_week: Vec<u32>) -> impl IntoView {
    let columns = day_bars(&days, &this_week, &last_week)
        .into_iter()
        .map(|bars| {
            view! {
                <div class="bar-chart__column">
                    <div class="bar-chart__pair">
                        <div
                            class="bar-chart__bar bar-chart__bar--last"
                            style:height=format!("{:.0}px", bars.last_week_px)
                        ></div>
                        <div
                            class="bar-chart__bar bar-chart__bar--this"
                            style:height=format!("{:.0}px", bars.this_week_px)
                        ></div>
                    </div>
                    <span class="bar-chart__day">{bars.day}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Credited>
            <div class="bar-chart">
                <div class="bar-chart__label">{CHART_LABEL}</div>
                <div class="bar-chart__columns">{columns}</div>
                <div class="bar-chart__legend">
                    <span class="bar-chart__key bar-chart__key--this">"This week"</span>
                    <span class="bar-chart__key bar-chart__key--last">"Last week"</span>
                </div>
            </div>
        </Credited>
    }
}
