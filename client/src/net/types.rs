//! Wire DTOs for the recommendation backend's REST API.
//!
//! DESIGN
//! ======
//! The backend is the sole authority on these shapes. Every list and counter
//! defaults when absent so a partial payload still renders instead of failing
//! the whole screen.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body sent to `/api/login/` and `/api/register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login/register response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Identity returned by `/api/ping/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PingUser {
    pub username: String,
    pub id: i64,
}

/// Error envelope. The auth views use `error`; framework-level rejections
/// (missing/expired token) use `detail`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Best user-facing message carried by the body, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.detail.as_deref())
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Counters returned after a CSV import.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImportSummary {
    pub status: String,
    pub movies_created: u32,
    pub movies_matched: u32,
    pub relationships_created: u32,
    pub relationships_updated: u32,
}

/// Counters returned after linking an RSS feed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RssSyncSummary {
    pub status: String,
    pub rss_url: String,
    pub entries_processed: u32,
    pub movies_created: u32,
    pub movieuser_created: u32,
    pub movieuser_updated: u32,
}

/// A named entry in one of the report's top-5 lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RankedName {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub count: Option<u32>,
}

/// One bucket of the movies-by-decade histogram.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DecadeCount {
    pub label: String,
    #[serde(default)]
    pub count: u32,
}

/// Weekly statistics report from `/api/stats/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsReport {
    /// Watches logged this week.
    pub total_watches: u32,
    /// Change against last week in percent; `None` when last week was empty.
    pub percent_change: Option<f64>,
    /// Day labels, aligned with `this_week` / `last_week`.
    pub days: Vec<String>,
    pub this_week: Vec<u32>,
    pub last_week: Vec<u32>,
    pub directors: Vec<RankedName>,
    pub actors: Vec<RankedName>,
    pub genres: Vec<RankedName>,
    pub recent_films: Vec<RankedName>,
    pub by_decade: Vec<DecadeCount>,
}
