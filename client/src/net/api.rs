//! REST API helpers for communicating with the recommendation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response is reduced to a status code plus body text first, and the
//! pure `*_from_response` helpers below decide the outcome. Callers never see
//! transport details; they get an `ApiError` whose `Display` is ready to show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
use super::types::{ErrorBody, TokenResponse};
use super::types::{Credentials, ImportSummary, PingUser, RssSyncSummary, StatsReport};
use crate::state::connect::{CsvHandle, CsvSlots};

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOGIN_ENDPOINT: &str = "/api/login/";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const REGISTER_ENDPOINT: &str = "/api/register/";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const PING_ENDPOINT: &str = "/api/ping/";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const IMPORT_ENDPOINT: &str = "/api/letterboxd/import/";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const RSS_ENDPOINT: &str = "/api/letterboxd/rss/";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const STATS_ENDPOINT: &str = "/api/stats/";

/// Shown whenever the backend cannot be reached or answers unexpectedly.
pub const SERVER_UNAVAILABLE: &str = "Server unavailable. Please try again later.";

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FAILED: &str = "Login failed";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_FAILED: &str = "Registration failed";
#[cfg(any(test, feature = "hydrate"))]
const IMPORT_FAILED: &str = "Import failed";
#[cfg(any(test, feature = "hydrate"))]
const RSS_FAILED: &str = "RSS sync failed";
#[cfg(any(test, feature = "hydrate"))]
const STATS_FAILED: &str = "Failed to fetch stats";

/// Failure categories surfaced to pages.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A bearer-authenticated request was answered with 401/403.
    #[error("Not authenticated. Please sign in again.")]
    Unauthorized,
    /// Network failure or an answer the client cannot interpret.
    #[error("{0}")]
    Unavailable(String),
    /// The server refused the request and said why (or a fallback reason).
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    #[cfg(any(test, feature = "hydrate"))]
    fn unavailable() -> Self {
        Self::Unavailable(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Result of the `/api/ping/` session check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PingOutcome {
    /// Token accepted; carries the identity the server resolved.
    Authenticated(PingUser),
    /// Token refused (401/403).
    Rejected,
    /// Anything else, including network failures.
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_auth_rejection(status: u16) -> bool {
    status == 401 || status == 403
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map a non-success response to an `ApiError`.
///
/// `bearer` marks requests that carried a token: for those a 401/403 means the
/// session is gone rather than that the submitted data was wrong.
#[cfg(any(test, feature = "hydrate"))]
fn failure_from_response(status: u16, body: &str, fallback: &str, bearer: bool) -> ApiError {
    if bearer && is_auth_rejection(status) {
        return ApiError::Unauthorized;
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message().map(str::to_owned));
    ApiError::Rejected(message.unwrap_or_else(|| fallback.to_owned()))
}

/// Extract the access token from a login/register response.
///
/// Only `expected` counts as success: login answers 200, register 201.
#[cfg(any(test, feature = "hydrate"))]
fn token_from_response(status: u16, body: &str, expected: u16, fallback: &str) -> Result<String, ApiError> {
    if status != expected {
        return Err(failure_from_response(status, body, fallback, false));
    }
    serde_json::from_str::<TokenResponse>(body)
        .map(|t| t.access_token)
        .map_err(|_| ApiError::unavailable())
}

#[cfg(any(test, feature = "hydrate"))]
fn ping_from_response(status: u16, body: &str) -> PingOutcome {
    if is_auth_rejection(status) {
        return PingOutcome::Rejected;
    }
    if status != 200 {
        return PingOutcome::Unavailable;
    }
    serde_json::from_str::<PingUser>(body).map_or(PingOutcome::Unavailable, PingOutcome::Authenticated)
}

#[cfg(any(test, feature = "hydrate"))]
fn json_from_response<T: DeserializeOwned>(status: u16, body: &str, fallback: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(failure_from_response(status, body, fallback, true));
    }
    serde_json::from_str(body).map_err(|_| ApiError::unavailable())
}

/// Stats failures never distinguish an expired session from a server error.
#[cfg(any(test, feature = "hydrate"))]
fn stats_from_response(status: u16, body: &str) -> Result<StatsReport, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Rejected(STATS_FAILED.to_owned()));
    }
    json_from_response(status, body, STATS_FAILED)
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    log::warn!("api request failed: {err}");
    ApiError::unavailable()
}

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport_error)?;
    Ok((status, body))
}

#[cfg(not(feature = "hydrate"))]
fn not_in_browser() -> ApiError {
    ApiError::Unavailable("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn submit_credentials(
    endpoint: &str,
    credentials: &Credentials,
    expected: u16,
    fallback: &str,
) -> Result<String, ApiError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(credentials)
        .map_err(transport_error)?
        .send()
        .await
        .map_err(transport_error)?;
    let (status, body) = read_response(resp).await?;
    token_from_response(status, &body, expected, fallback)
}

/// Exchange credentials for an access token via `POST /api/login/`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` with the server's message on any status other
/// than 200, or `ApiError::Unavailable` when the server cannot be reached.
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        submit_credentials(LOGIN_ENDPOINT, credentials, 200, LOGIN_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(not_in_browser())
    }
}

/// Create an account and receive its access token via `POST /api/register/`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` on any status other than 201.
pub async fn register(credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        submit_credentials(REGISTER_ENDPOINT, credentials, 201, REGISTER_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(not_in_browser())
    }
}

/// Check a stored token against `GET /api/ping/`.
pub async fn ping(token: &str) -> PingOutcome {
    #[cfg(feature = "hydrate")]
    {
        let sent = gloo_net::http::Request::get(PING_ENDPOINT)
            .header("Authorization", &bearer_header(token))
            .send()
            .await;
        let resp = match sent {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("ping failed: {e}");
                return PingOutcome::Unavailable;
            }
        };
        match read_response(resp).await {
            Ok((status, body)) => ping_from_response(status, &body),
            Err(_) => PingOutcome::Unavailable,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        PingOutcome::Unavailable
    }
}

/// Upload the selected Letterboxd CSV exports via `POST /api/letterboxd/import/`.
///
/// Only filled slots are sent; the multipart field name is the slot's form key.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` on 401/403 and `ApiError::Rejected` with
/// the server's message on other failures.
pub async fn import_letterboxd(token: &str, slots: &CsvSlots<CsvHandle>) -> Result<ImportSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(|_| ApiError::unavailable())?;
        for (slot, selection) in slots.selected() {
            form.append_with_blob_and_filename(slot.form_field(), &selection.handle, &selection.file_name)
                .map_err(|_| ApiError::unavailable())?;
        }
        let resp = gloo_net::http::Request::post(IMPORT_ENDPOINT)
            .header("Authorization", &bearer_header(token))
            .body(form)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        let (status, body) = read_response(resp).await?;
        json_from_response(status, &body, IMPORT_FAILED)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, slots);
        Err(not_in_browser())
    }
}

/// Link a Letterboxd username or profile URL for weekly RSS sync via
/// `POST /api/letterboxd/rss/`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` with the server's message when the feed is
/// rejected.
pub async fn sync_rss(token: &str, rss: &str) -> Result<RssSyncSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "rss": rss.trim() });
        let resp = gloo_net::http::Request::post(RSS_ENDPOINT)
            .header("Authorization", &bearer_header(token))
            .json(&payload)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        let (status, body) = read_response(resp).await?;
        json_from_response(status, &body, RSS_FAILED)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, rss);
        Err(not_in_browser())
    }
}

/// Fetch the weekly statistics report via `GET /api/stats/`.
///
/// # Errors
///
/// Any non-success status, 401/403 included, becomes the generic "Failed to
/// fetch stats" message; the body is not inspected.
pub async fn fetch_stats(token: &str) -> Result<StatsReport, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(STATS_ENDPOINT)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(transport_error)?;
        let (status, body) = read_response(resp).await?;
        stats_from_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(not_in_browser())
    }
}
