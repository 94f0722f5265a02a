//! Configuration for reaching a Story Spoiler deployment.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Public deployment the suite was written against.
pub const DEFAULT_BASE_URL: &str = "https://d3s5nxhwblsjbi.cloudfront.net/";
/// Default account on the public deployment.
const DEFAULT_USERNAME: &str = "kalinexam";
/// Default password on the public deployment.
const DEFAULT_PASSWORD: &str = "kalinexam";

/// Env var overriding `api.base_url`.
pub const ENV_BASE_URL: &str = "SPOILER_BASE_URL";
/// Env var overriding `credentials.username`.
pub const ENV_USERNAME: &str = "SPOILER_USERNAME";
/// Env var overriding `credentials.password`.
pub const ENV_PASSWORD: &str = "SPOILER_PASSWORD";
/// Env var overriding `api.timeout_seconds`.
pub const ENV_TIMEOUT_SECONDS: &str = "SPOILER_TIMEOUT_SECONDS";

/// Complete harness configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpoilerConfig {
    /// Where the API lives and how long to wait for it
    pub api: ApiConfig,
    /// Account used for the login call
    pub credentials: Credentials,
}

/// API endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, with or without a trailing slash
    pub base_url: String,
    /// Per-request timeout; `None` keeps the transport default
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_seconds: None,
        }
    }
}

/// Username/password pair sent to the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Account name
    pub username: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Create credentials from a username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

// Keeps the password out of logs.
impl Debug for Credentials {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter
            .debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ApiConfig {
    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl SpoilerConfig {
    /// Configuration pointing at `base_url` with default credentials.
    #[must_use]
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                timeout_seconds: None,
            },
            credentials: Credentials::default(),
        }
    }

    /// Load config from a TOML file. Missing sections keep their defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;

        tracing::debug!(
            "Loaded config from {}: base_url={}, username={}",
            path.display(),
            config.api.base_url,
            config.credentials.username
        );

        Ok(config)
    }

    /// Apply `SPOILER_*` environment variable overrides.
    ///
    /// # Errors
    /// Returns an error if an override holds an invalid value
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns an error if an override holds an invalid value
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.api.base_url = base_url;
        }
        if let Some(username) = lookup(ENV_USERNAME) {
            self.credentials.username = username;
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.credentials.password = password;
        }
        if let Some(raw_timeout) = lookup(ENV_TIMEOUT_SECONDS) {
            let seconds = raw_timeout.trim().parse::<u64>().map_err(|err| {
                Error::Config(format!(
                    "{ENV_TIMEOUT_SECONDS} must be a whole number of seconds: {err}"
                ))
            })?;
            self.api.timeout_seconds = Some(seconds);
        }

        self.validate()
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    /// Returns an error if the base URL is not an http(s) URL
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base_url must start with http:// or https://, got {base_url:?}"
            )));
        }
        Ok(())
    }
}
