use std::env::vars;
use std::time::Duration;

use log::info;
use reqwest::Url;
use serde::Deserialize;
use serde_env::from_iter;
use thiserror::Error;
use turbo_states::impl_state;

/// Base URL of the merchant service used when `TURBO_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://turbo-dev.unicommerce.co.in/merchant";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(String),
    #[error("TURBO_API_BASE_URL `{url}` is invalid: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("TURBO_REQUEST_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    turbo_api_base_url: Option<String>,
    turbo_request_timeout_secs: Option<u64>,
    turbo_merchant_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    /// Token restored at startup. `None` means the user has to sign in.
    pub session_token: Option<String>,
}

impl_state!(BusinessConfig, snapshot);

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            session_token: None,
        }
    }
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Reads `TURBO_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawConfig = from_iter(vars()).map_err(|e| ConfigError::Env(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let api_base_url = raw
            .turbo_api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());

        match Url::parse(&api_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::InvalidBaseUrl {
                    url: api_base_url,
                    reason: format!("unsupported scheme `{}`", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidBaseUrl {
                    url: api_base_url,
                    reason: e.to_string(),
                });
            }
        }

        let request_timeout = match raw.turbo_request_timeout_secs {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let session_token = raw
            .turbo_merchant_token
            .map(|token| token.trim().to_owned())
            .filter(|token| !token.is_empty());

        info!(
            "config: api_base_url={api_base_url}, timeout={}s, session token {}",
            request_timeout.as_secs(),
            if session_token.is_some() { "present" } else { "absent" }
        );

        Ok(Self {
            api_base_url,
            request_timeout,
            session_token,
        })
    }
}
