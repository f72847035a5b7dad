//! Client configuration.
//!
//! Base URL and API version are resolved once at client construction and
//! never change afterwards.

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.inkpost.com";

/// API version segment appended to the base URL.
pub const API_VERSION: &str = "v1";

/// Connection settings for a [`crate::Client`].
#[derive(Debug, Clone)]
pub struct Config {
    /// API key, sent as the basic-auth username with an empty password.
    pub api_key: String,
    pub base_url: String,
    pub api_version: String,
}

fn default_base_url() -> String {
    std::env::var("INKPOST_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

impl Config {
    /// Configuration against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            api_version: API_VERSION.to_string(),
        }
    }

    /// Overrides the base URL (tests, proxies).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the API version segment.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// The fully resolved URL prefix: `{base_url}/{api_version}`.
    pub(crate) fn versioned_base_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version
        )
    }
}
