//! DevPulse Data Collector
//!
//! Fetches user, repository and activity data from the GitHub REST API
//! and assembles it into the dashboard views computed by
//! `devpulse-core`.

pub mod dashboard;
pub mod github;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CollectorError>;

/// Configuration for the GitHub client.
///
/// Passed explicitly at construction; nothing in the request path reads
/// process environment. `from_env` exists for binaries that want the
/// conventional `GITHUB_TOKEN` / `GITHUB_API_URL` variables.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub api_base: String,
    pub github_token: Option<String>,
    pub user_agent: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            github_token: None,
            user_agent: "DevPulse/0.1 (https://devpulse.dev)".to_string(),
        }
    }
}

impl CollectorConfig {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if !token.is_empty() {
                config.github_token = Some(token);
            }
        }
        if let Ok(base) = std::env::var("GITHUB_API_URL") {
            if !base.is_empty() {
                config.api_base = base;
            }
        }
        config
    }
}
