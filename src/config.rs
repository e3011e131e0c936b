//! Client configuration
//!
//! Values come from command-line flags first, then environment variables,
//! then defaults.

use crate::error::{Error, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "CLARITY_API_URL";

/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "CLARITY_TIMEOUT_SECS";

/// Base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the feedback API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL; always ends with `/` so endpoint paths join under it
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a config from an explicit base URL with the default timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Resolve configuration from flags and the process environment
    pub fn resolve(api_url: Option<&str>, timeout_secs: Option<u64>) -> Result<Self> {
        Self::resolve_with(api_url, timeout_secs, |key| env::var(key).ok())
    }

    /// Resolve configuration using `lookup` in place of the process environment
    pub fn resolve_with<F>(
        api_url: Option<&str>,
        timeout_secs: Option<u64>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = api_url
            .map(String::from)
            .or_else(|| lookup(API_URL_ENV))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let secs = match timeout_secs {
            Some(secs) => secs,
            None => match lookup(TIMEOUT_ENV) {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    Error::Config(format!("{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"))
                })?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        if secs == 0 {
            return Err(Error::Config("timeout must be at least 1 second".to_string()));
        }

        Ok(Self {
            base_url: parse_base_url(&url)?,
            timeout: Duration::from_secs(secs),
        })
    }

    /// URL of the feedback collection
    pub fn collection_url(&self) -> Result<Url> {
        self.base_url
            .join("api/feedback")
            .map_err(|e| Error::Config(format!("cannot build collection URL: {e}")))
    }

    /// URL of a single feedback record
    pub fn record_url(&self, id_segment: &str) -> Result<Url> {
        self.base_url
            .join(&format!("api/feedback/{id_segment}"))
            .map_err(|e| Error::Config(format!("cannot build record URL: {e}")))
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url =
        Url::parse(raw.trim()).map_err(|e| Error::Config(format!("invalid API URL '{raw}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "API URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
