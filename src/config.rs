//! Agent configuration
//!
//! Configuration is read once at startup, from the process environment, and is
//! immutable afterwards.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::{
    backend::gemini::{GeminiConfig, DEFAULT_API_BASE, DEFAULT_MODEL},
    service::core::DEFAULT_BACKEND_TIMEOUT,
};

/// Public base URL used in the agent card when `BASE_URL` is unset
pub const DEFAULT_BASE_URL: &str = "https://aiagentcodehelper-production.up.railway.app";

/// Error loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `BASE_URL` is not a valid absolute URL
    #[error("invalid BASE_URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// A numeric variable could not be parsed
    #[error("invalid value '{value}' for {key}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Configuration for the agent server
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Public base URL advertised in the agent card
    pub base_url: Url,

    /// Upper bound on a single backend call
    pub backend_timeout: Duration,

    /// Gemini backend settings
    pub gemini: GeminiConfig,
}

impl AgentConfig {
    /// Create a configuration with defaults and no API key
    pub fn new(base_url: Url) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            base_url,
            backend_timeout: DEFAULT_BACKEND_TIMEOUT,
            gemini: GeminiConfig::new(None),
        }
    }

    /// Load configuration from the process environment
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `GEMINI_API_KEY` | unset (requests fail with -32000) |
    /// | `GEMINI_MODEL` | `gemini-2.5-flash` |
    /// | `GEMINI_API_BASE` | Google's `v1beta` endpoint |
    /// | `BASE_URL` | [`DEFAULT_BASE_URL`] |
    /// | `A2A_BACKEND_TIMEOUT_SECS` | 30 |
    /// | `HOST` / `PORT` | `0.0.0.0` / 8000 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_base_url = var("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            value: raw_base_url.clone(),
            source,
        })?;

        let mut config = Self::new(base_url);

        if let Some(host) = var("HOST") {
            config.host = host;
        }
        if let Some(port) = var("PORT") {
            config.port = parse_number("PORT", &port)?;
        }
        if let Some(secs) = var("A2A_BACKEND_TIMEOUT_SECS") {
            config.backend_timeout = parse_timeout("A2A_BACKEND_TIMEOUT_SECS", &secs)?;
        }

        config.gemini = GeminiConfig::new(var("GEMINI_API_KEY"))
            .with_api_base(var("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()))
            .with_model(var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()))
            .with_request_timeout(config.backend_timeout);

        Ok(config)
    }

    /// Set the bind interface
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the backend call timeout
    pub fn with_backend_timeout(mut self, timeout: Duration) -> Self {
        self.backend_timeout = timeout;
        self.gemini.request_timeout = timeout;
        self
    }

    /// `host:port` to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether a Gemini API key is present
    pub fn has_api_key(&self) -> bool {
        self.gemini
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}

/// Timeouts are whole seconds and must be at least one
fn parse_timeout(key: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match parse_number::<u64>(key, value)? {
        0 => Err(ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        }),
        secs => Ok(Duration::from_secs(secs)),
    }
}
