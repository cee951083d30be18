use crate::error::{Error, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub github: GitHubConfig,
}

#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_url: String,
    pub user_agent: String,
    /// `None` disables the per-request timeout.
    pub request_timeout: Option<Duration>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_GITHUB_API_URL.to_string(),
            user_agent: default_user_agent(),
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl GitHubConfig {
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self> {
        self.api_url = normalize_api_url(api_url)?;
        Ok(self)
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let api_url = env::var("GITHUB_API_URL")
            .map(|v| normalize_api_url(&v))
            .unwrap_or_else(|_| Ok(DEFAULT_GITHUB_API_URL.to_string()))?;

        let user_agent = env::var("GITHUB_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        let timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Ok(Self {
            host,
            port,
            github: GitHubConfig {
                api_url,
                user_agent,
                request_timeout: timeout_from_secs(timeout_secs),
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_user_agent() -> String {
    format!("orgrepos/{}", env!("CARGO_PKG_VERSION"))
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn normalize_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::Config(format!(
            "GITHUB_API_URL must be an http(s) URL, got {:?}",
            raw
        )));
    }
    Ok(trimmed.to_string())
}
