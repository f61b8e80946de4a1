use super::*;

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_prefers_error_over_detail() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"error":"Invalid credentials","detail":"ignored"}"#).unwrap();
    assert_eq!(body.message(), Some("Invalid credentials"));
}

#[test]
fn error_body_falls_back_to_detail() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"detail":"Given token not valid for any token type"}"#).unwrap();
    assert_eq!(body.message(), Some("Given token not valid for any token type"));
}

#[test]
fn error_body_blank_message_is_none() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"   "}"#).unwrap();
    assert_eq!(body.message(), None);
}

#[test]
fn error_body_ignores_field_errors() {
    let body: ErrorBody = serde_json::from_str(r#"{"username":["This field is required."]}"#).unwrap();
    assert_eq!(body.message(), None);
}

// =============================================================
// PingUser / TokenResponse
// =============================================================

#[test]
fn ping_user_decodes_numeric_id() {
    let user: PingUser = serde_json::from_str(r#"{"username":"alex","id":42}"#).unwrap();
    assert_eq!(user, PingUser { username: "alex".to_owned(), id: 42 });
}

#[test]
fn token_response_requires_access_token() {
    assert!(serde_json::from_str::<TokenResponse>(r#"{"refresh":"x"}"#).is_err());
}

#[test]
fn credentials_serialize_as_plain_object() {
    let creds = Credentials { username: "alex".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        serde_json::json!({ "username": "alex", "password": "pw" })
    );
}

// =============================================================
// StatsReport
// =============================================================

#[test]
fn stats_report_decodes_camel_case_payload() {
    let raw = serde_json::json!({
        "totalWatches": 6,
        "percentChange": 50.0,
        "days": ["Sunday", "Monday"],
        "thisWeek": [2, 4],
        "lastWeek": [1, 3],
        "directors": [{ "name": "Michael Mann", "count": 2 }],
        "actors": [],
        "genres": [{ "name": "Crime", "count": 3 }],
        "recentFilms": [{ "name": "Heat" }],
        "byDecade": [{ "label": "90s", "count": 6 }]
    });
    let report: StatsReport = serde_json::from_value(raw).unwrap();
    assert_eq!(report.total_watches, 6);
    assert_eq!(report.percent_change, Some(50.0));
    assert_eq!(report.this_week, vec![2, 4]);
    assert_eq!(report.directors[0].count, Some(2));
    assert_eq!(report.recent_films[0].name, "Heat");
    assert_eq!(report.recent_films[0].count, None);
    assert_eq!(report.by_decade[0], DecadeCount { label: "90s".to_owned(), count: 6 });
}

#[test]
fn stats_report_null_percent_change_is_none() {
    let report: StatsReport =
        serde_json::from_str(r#"{"totalWatches":3,"percentChange":null}"#).unwrap();
    assert_eq!(report.percent_change, None);
    assert!(report.days.is_empty());
    assert!(report.by_decade.is_empty());
}

// =============================================================
// Import / RSS summaries
// =============================================================

#[test]
fn import_summary_missing_counters_default_to_zero() {
    let summary: ImportSummary =
        serde_json::from_str(r#"{"status":"ok","movies_created":4}"#).unwrap();
    assert_eq!(summary.status, "ok");
    assert_eq!(summary.movies_created, 4);
    assert_eq!(summary.movies_matched, 0);
}

#[test]
fn rss_summary_decodes_feed_url() {
    let summary: RssSyncSummary = serde_json::from_str(
        r#"{"status":"ok","rss_url":"https://letterboxd.com/alex/rss/","entries_processed":20}"#,
    )
    .unwrap();
    assert_eq!(summary.rss_url, "https://letterboxd.com/alex/rss/");
    assert_eq!(summary.entries_processed, 20);
}
