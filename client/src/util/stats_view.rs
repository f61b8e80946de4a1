//! Layout math for the statistics report.

#[cfg(test)]
#[path = "stats_view_test.rs"]
mod stats_view_test;

use crate::net::types::RankedName;

pub const DECADE_HEADER: &str = "Movies by Decade";
pub const CHART_LABEL: &str = "Day by Day";

pub const ORDINALS: [&str; 5] = ["1st", "2nd", "3rd", "4th", "5th"];

/// Tallest bar in the day-by-day chart, in pixels.
pub const BAR_MAX_HEIGHT_PX: f64 = 90.0;

#[must_use]
pub fn max_of(values: &[u32]) -> u32 {
    values.iter().copied().max().unwrap_or(0)
}

/// Top-five rows as `(ordinal, name)`.
#[must_use]
pub fn ranked_rows(items: &[RankedName]) -> Vec<(&'static str, String)> {
    ORDINALS.iter().zip(items).map(|(ord, item)| (*ord, item.name.clone())).collect()
}

/// One column of the weekly chart.
#[derive(Clone, Debug, PartialEq)]
pub struct DayBars {
    pub day: String,
    pub this_week_px: f64,
    pub last_week_px: f64,
}

/// Pair each day with this week's and last week's bar heights.
///
/// Both series share one scale so the bars compare directly; missing values
/// count as zero.
#[must_use]
pub fn day_bars(days: &[String], this_week: &[u32], last_week: &[u32]) -> Vec<DayBars> {
    let max = max_of(this_week).max(max_of(last_week)).max(1);
    let height = |series: &[u32], i: usize| {
        f64::from(series.get(i).copied().unwrap_or(0)) / f64::from(max) * BAR_MAX_HEIGHT_PX
    };
    days.iter()
        .enumerate()
        .map(|(i, day)| DayBars {
            day: day.clone(),
            this_week_px: height(this_week, i),
            last_week_px: height(last_week, i),
        })
        .collect()
}

/// Bar width in percent for a decade bucket; an all-zero histogram renders
/// empty bars instead of dividing by zero.
#[must_use]
pub fn decade_width_pct(count: u32, max: u32) -> f64 {
    f64::from(count) / f64::from(max.max(1)) * 100.0
}

/// Headline comparison against last week.
#[must_use]
pub fn percent_change_label(change: Option<f64>) -> String {
    match change {
        None => "no watches logged last week".to_owned(),
        Some(pct) if pct < 0.0 => format!("↓ {:.0}% vs last week", pct.abs()),
        Some(pct) => format!("↑ {pct:.0}% vs last week"),
    }
}
