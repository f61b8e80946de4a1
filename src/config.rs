//! Server configuration parsed from environment variables.

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_UPLOAD_MB: usize = 25;

const BYTES_PER_MB: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be used.
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend API origin, without a trailing slash.
    pub api_url: String,
    pub api_timeout: Duration,
    /// Largest request body the `/api` proxy accepts.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FILMREC_API_URL`: default `http://127.0.0.1:8000`
    /// - `FILMREC_API_TIMEOUT_SECS`: default 30
    /// - `FILMREC_MAX_UPLOAD_MB`: default 25
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for unparseable numbers, zero timeouts
    /// or limits, and non-http(s) API URLs.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", value("PORT"), DEFAULT_PORT)?;
        let api_url = match value("FILMREC_API_URL") {
            Some(raw) => parse_api_url(raw)?,
            None => DEFAULT_API_URL.to_owned(),
        };
        let timeout_secs = positive("FILMREC_API_TIMEOUT_SECS", value("FILMREC_API_TIMEOUT_SECS"), DEFAULT_API_TIMEOUT_SECS)?;
        let upload_mb = positive("FILMREC_MAX_UPLOAD_MB", value("FILMREC_MAX_UPLOAD_MB"), DEFAULT_MAX_UPLOAD_MB)?;
        let max_upload_bytes = upload_mb.checked_mul(BYTES_PER_MB).ok_or_else(|| ConfigError::Invalid {
            var: "FILMREC_MAX_UPLOAD_MB",
            value: upload_mb.to_string(),
            reason: "too large",
        })?;

        Ok(Self { port, api_url, api_timeout: Duration::from_secs(timeout_secs), max_upload_bytes })
    }
}

fn parse_or<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value, reason: "not a number" }),
    }
}

fn positive<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + Default + ToString,
{
    let parsed = parse_or(var, raw, default)?;
    if parsed == T::default() {
        return Err(ConfigError::Invalid { var, value: parsed.to_string(), reason: "must be greater than zero" });
    }
    Ok(parsed)
}

fn parse_api_url(raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::Invalid { var: "FILMREC_API_URL", value: raw, reason: "expected an http(s) URL" })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
