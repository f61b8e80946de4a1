use super::*;

#[test]
fn endpoints_keep_trailing_slashes() {
    for endpoint in [LOGIN_ENDPOINT, REGISTER_ENDPOINT, PING_ENDPOINT, IMPORT_ENDPOINT, RSS_ENDPOINT, STATS_ENDPOINT] {
        assert!(endpoint.starts_with("/api/"), "{endpoint}");
        assert!(endpoint.ends_with('/'), "{endpoint}");
    }
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

// =============================================================
// login / register
// =============================================================

#[test]
fn login_success_requires_exact_200() {
    let body = r#"{"access_token":"tok"}"#;
    assert_eq!(token_from_response(200, body, 200, LOGIN_FAILED), Ok("tok".to_owned()));
    assert_eq!(
        token_from_response(201, body, 200, LOGIN_FAILED),
        Err(ApiError::Rejected(LOGIN_FAILED.to_owned()))
    );
}

#[test]
fn register_success_requires_201() {
    let body = r#"{"access_token":"tok"}"#;
    assert_eq!(token_from_response(201, body, 201, REGISTER_FAILED), Ok("tok".to_owned()));
    assert_eq!(
        token_from_response(200, body, 201, REGISTER_FAILED),
        Err(ApiError::Rejected(REGISTER_FAILED.to_owned()))
    );
}

#[test]
fn login_failure_surfaces_server_error_text() {
    let err = token_from_response(401, r#"{"error":"Invalid credentials"}"#, 200, LOGIN_FAILED).unwrap_err();
    assert_eq!(err, ApiError::Rejected("Invalid credentials".to_owned()));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn login_failure_without_json_body_uses_fallback() {
    let err = token_from_response(500, "<html>oops</html>", 200, LOGIN_FAILED).unwrap_err();
    assert_eq!(err.to_string(), "Login failed");
}

#[test]
fn login_success_without_token_is_unavailable() {
    let err = token_from_response(200, "{}", 200, LOGIN_FAILED).unwrap_err();
    assert_eq!(err, ApiError::Unavailable(SERVER_UNAVAILABLE.to_owned()));
}

// =============================================================
// ping
// =============================================================

#[test]
fn ping_200_yields_identity() {
    assert_eq!(
        ping_from_response(200, r#"{"username":"alex","id":7}"#),
        PingOutcome::Authenticated(PingUser { username: "alex".to_owned(), id: 7 })
    );
}

#[test]
fn ping_401_and_403_are_rejections() {
    assert_eq!(ping_from_response(401, ""), PingOutcome::Rejected);
    assert_eq!(ping_from_response(403, r#"{"detail":"nope"}"#), PingOutcome::Rejected);
}

#[test]
fn ping_other_statuses_are_unavailable() {
    for status in [204, 400, 404, 500, 502, 503] {
        assert_eq!(ping_from_response(status, ""), PingOutcome::Unavailable, "{status}");
    }
}

#[test]
fn ping_200_with_garbage_body_is_unavailable() {
    assert_eq!(ping_from_response(200, "not json"), PingOutcome::Unavailable);
}

// =============================================================
// bearer-authenticated JSON endpoints
// =============================================================

#[test]
fn json_success_accepts_any_2xx() {
    let summary: ImportSummary = json_from_response(202, r#"{"status":"ok"}"#, IMPORT_FAILED).unwrap();
    assert_eq!(summary.status, "ok");
}

#[test]
fn json_bearer_rejection_is_unauthorized() {
    let err = json_from_response::<ImportSummary>(401, r#"{"detail":"expired"}"#, IMPORT_FAILED).unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(err.to_string(), "Not authenticated. Please sign in again.");
}

#[test]
fn json_failure_prefers_server_error() {
    let err = json_from_response::<RssSyncSummary>(400, r#"{"error":"Invalid RSS input"}"#, RSS_FAILED).unwrap_err();
    assert_eq!(err.to_string(), "Invalid RSS input");
}

#[test]
fn json_failure_falls_back_per_endpoint() {
    let err = json_from_response::<ImportSummary>(500, "", IMPORT_FAILED).unwrap_err();
    assert_eq!(err.to_string(), "Import failed");
    let err = json_from_response::<RssSyncSummary>(500, "", RSS_FAILED).unwrap_err();
    assert_eq!(err.to_string(), "RSS sync failed");
}

#[test]
fn stats_failure_ignores_body() {
    let err = stats_from_response(500, r#"{"error":"boom"}"#).unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch stats");
}

#[test]
fn stats_auth_rejection_is_generic_failure() {
    for status in [401, 403] {
        let err = stats_from_response(status, r#"{"detail":"Token expired"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected(STATS_FAILED.to_owned()), "{status}");
        assert_eq!(err.to_string(), "Failed to fetch stats");
    }
}

#[test]
fn unbearered_401_keeps_server_message() {
    let err = failure_from_response(401, r#"{"error":"Invalid credentials"}"#, LOGIN_FAILED, false);
    assert_eq!(err, ApiError::Rejected("Invalid credentials".to_owned()));
}
