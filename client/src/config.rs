//! Client configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const SESSION_FILE: &str = "session.json";
const HOME_DIR_NAME: &str = ".splitmates";

/// Errors produced while assembling a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The backend base URL was set but empty.
    #[error("empty API base URL")]
    EmptyApiUrl,

    /// Neither `SPLITMATES_HOME` nor `HOME` is set.
    #[error("cannot locate a home directory: set SPLITMATES_HOME or HOME")]
    MissingHome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub home: PathBuf,
    pub timeouts: HttpTimeouts,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `SPLITMATES_API_URL`: backend base URL, default `http://127.0.0.1:8000/api/v1`
    /// - `SPLITMATES_HOME`: token slot directory, default `$HOME/.splitmates`
    /// - `SPLITMATES_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SPLITMATES_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or no home directory can be found.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::var("SPLITMATES_API_URL").ok(),
            std::env::var("SPLITMATES_HOME")
                .ok()
                .filter(|home| !home.trim().is_empty())
                .map(PathBuf::from),
        )
    }

    /// Build config from explicit overrides. A missing URL takes the default,
    /// a missing home takes `$HOME/.splitmates`; timeouts always come from
    /// the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or no home directory can be found.
    pub fn from_parts(api_url: Option<String>, home: Option<PathBuf>) -> Result<Self, ConfigError> {
        let api_url = normalize_api_url(api_url.as_deref().unwrap_or(DEFAULT_API_URL))?;
        let home = match home {
            Some(home) => home,
            None => default_home()?,
        };
        let timeouts = HttpTimeouts {
            request_secs: env_parse_u64("SPLITMATES_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("SPLITMATES_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { api_url, home, timeouts })
    }

    /// Location of the durable token slot.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.home.join(SESSION_FILE)
    }
}

fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyApiUrl);
    }
    Ok(trimmed.to_owned())
}

fn default_home() -> Result<PathBuf, ConfigError> {
    std::env::var("HOME")
        .ok()
        .filter(|home| !home.trim().is_empty())
        .map(|home| PathBuf::from(home).join(HOME_DIR_NAME))
        .ok_or(ConfigError::MissingHome)
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
