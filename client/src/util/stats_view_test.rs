use super::*;

fn names(list: &[&str]) -> Vec<RankedName> {
    list.iter().map(|n| RankedName { name: (*n).to_owned(), count: None }).collect()
}

#[test]
fn max_of_empty_is_zero() {
    assert_eq!(max_of(&[]), 0);
    assert_eq!(max_of(&[3, 9, 2]), 9);
}

#[test]
fn ranked_rows_caps_at_five() {
    let rows = ranked_rows(&names(&["a", "b", "c", "d", "e", "f"]));
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], ("1st", "a".to_owned()));
    assert_eq!(rows[4], ("5th", "e".to_owned()));
}

#[test]
fn ranked_rows_short_list() {
    let rows = ranked_rows(&names(&["Heat"]));
    assert_eq!(rows, vec![("1st", "Heat".to_owned())]);
}

#[test]
fn day_bars_share_one_scale() {
    let days = vec!["Sun".to_owned(), "Mon".to_owned()];
    let bars = day_bars(&days, &[2, 4], &[8, 0]);
    assert_eq!(bars[0].this_week_px, 22.5);
    assert_eq!(bars[0].last_week_px, 90.0);
    assert_eq!(bars[1].this_week_px, 45.0);
    assert_eq!(bars[1].last_week_px, 0.0);
}

#[test]
fn day_bars_missing_values_are_zero() {
    let days = vec!["Sun".to_owned(), "Mon".to_owned(), "Tue".to_owned()];
    let bars = day_bars(&days, &[1], &[]);
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].this_week_px, 90.0);
    assert_eq!(bars[2].this_week_px, 0.0);
}

#[test]
fn day_bars_all_zero_does_not_divide_by_zero() {
    let days = vec!["Sun".to_owned()];
    let bars = day_bars(&days, &[0], &[0]);
    assert_eq!(bars[0].this_week_px, 0.0);
}

#[test]
fn decade_width_scales_to_max() {
    assert_eq!(decade_width_pct(5, 10), 50.0);
    assert_eq!(decade_width_pct(10, 10), 100.0);
    assert_eq!(decade_width_pct(0, 0), 0.0);
}

#[test]
fn percent_change_label_directions() {
    assert_eq!(percent_change_label(Some(28.0)), "↑ 28% vs last week");
    assert_eq!(percent_change_label(Some(-33.3)), "↓ 33% vs last week");
    assert_eq!(percent_change_label(None), "no watches logged last week");
}

// =============================================================
// Sample report (the original static credits screen)
// =============================================================

fn sample_report() -> crate::net::types::StatsReport {
    serde_json::from_value(serde_json::json!({
        "totalWatches": 383,
        "percentChange": 28,
        "days": ["Fri", "Sat", "Sun", "Mon", "Tue", "Wed", "Thu"],
        "thisWeek": [18, 27, 32, 55, 82, 41, 48],
        "lastWeek": [24, 22, 74, 60, 19, 22, 21],
        "directors": [
            { "name": "David Fincher" },
            { "name": "Michael Mann" },
            { "name": "Wong Kar-wai" },
            { "name": "Denis Villeneuve" },
            { "name": "Christopher Nolan" }
        ],
        "recentFilms": [{ "name": "Heat" }, { "name": "Whiplash" }],
        "byDecade": [
            { "label": "Pre-60s", "count": 4 },
            { "label": "90s", "count": 34 },
            { "label": "10s", "count": 41 }
        ]
    }))
    .unwrap()
}

#[test]
fn sample_report_lays_out() {
    let report = sample_report();
    assert_eq!(percent_change_label(report.percent_change), "↑ 28% vs last week");

    let bars = day_bars(&report.days, &report.this_week, &report.last_week);
    assert_eq!(bars.len(), 7);
    let tuesday = &bars[4];
    assert_eq!(tuesday.day, "Tue");
    assert_eq!(tuesday.this_week_px, BAR_MAX_HEIGHT_PX);

    let rows = ranked_rows(&report.directors);
    assert_eq!(rows[0], ("1st", "David Fincher".to_owned()));
    assert_eq!(rows[4], ("5th", "Christopher Nolan".to_owned()));
    assert!(report.actors.is_empty());

    let counts: Vec<u32> = report.by_decade.iter().map(|d| d.count).collect();
    let max = max_of(&counts);
    assert_eq!(decade_width_pct(41, max), 100.0);
    assert!(decade_width_pct(4, max) < 10.0);
}

#[test]
fn section_labels() {
    assert_eq!(DECADE_HEADER, "Movies by Decade");
    assert_eq!(CHART_LABEL, "Day by Day");
}
