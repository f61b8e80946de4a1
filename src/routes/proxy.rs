//! Same-origin `/api/*` forwarding to the backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server. Requests under `/api` are
//! replayed against `FILMREC_API_URL` with the same method, path, query, and
//! body; the backend's status and body come back untouched. Only a transport
//! failure is answered here, as a 502 carrying the message the client shows
//! for an unreachable server.

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::uri::PathAndQuery;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

/// Body of the 502 returned when the backend cannot be reached.
pub const UPSTREAM_UNAVAILABLE: &str = "Server unavailable. Please try again later.";

/// Request headers copied onto the upstream request.
pub const FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("http client build failed: {0}")]
    ClientBuild(reqwest::Error),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failed");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": UPSTREAM_UNAVAILABLE }))).into_response()
    }
}

/// Shared upstream client; cheap to clone into handler state.
#[derive(Clone, Debug)]
pub struct ApiProxy {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl ApiProxy {
    /// # Errors
    ///
    /// Returns `ProxyError::ClientBuild` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder().timeout(timeout).build().map_err(ProxyError::ClientBuild)?;
        Ok(Self { client, base_url: Arc::from(base_url.trim_end_matches('/')) })
    }

    /// Upstream URL for an incoming path and query.
    #[must_use]
    pub fn upstream_url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base_url)
    }
}

/// Replay the request upstream and relay status, content type, and body.
///
/// # Errors
///
/// Returns `ProxyError::Upstream` (rendered as 502) when the backend is
/// unreachable or the response body cannot be read.
pub async fn forward(
    State(proxy): State<ApiProxy>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = uri.path_and_query().map_or(uri.path(), PathAndQuery::as_str);
    let mut request = proxy.client.request(method.clone(), proxy.upstream_url(path));
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, path, status = status.as_u16(), "api request proxied");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
