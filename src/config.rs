// ABOUTME: Environment-based client configuration
// ABOUTME: API base URL, HTTP timeouts, log level, and session store location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

//! Environment-based configuration for the client

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::api::ApiClientConfig;
use crate::constants::env_config;
use crate::session::FileSessionStore;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Client configuration loaded from environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the ZRun backend
    pub api_base_url: String,
    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,
    /// HTTP connect timeout in seconds
    pub http_connect_timeout_secs: u64,
    /// Log level for the client
    pub log_level: LogLevel,
    /// Where the durable session file lives
    pub session_store_path: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when `ZRUN_API_URL` is present but not a valid URL
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let api_base_url = env_config::api_base_url();
        Url::parse(&api_base_url)
            .with_context(|| format!("Invalid ZRUN_API_URL value: {api_base_url}"))?;

        Ok(Self {
            api_base_url,
            http_timeout_secs: env_config::http_timeout_secs(),
            http_connect_timeout_secs: env_config::http_connect_timeout_secs(),
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            session_store_path: env::var("ZRUN_SESSION_FILE")
                .map_or_else(|_| FileSessionStore::default_path(), PathBuf::from),
        })
    }

    /// API client configuration derived from this config
    #[must_use]
    pub fn api_client_config(&self) -> ApiClientConfig {
        ApiClientConfig {
            base_url: self.api_base_url.clone(),
            timeout_secs: self.http_timeout_secs,
            connect_timeout_secs: self.http_connect_timeout_secs,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_owned(),
            http_timeout_secs: crate::constants::http::DEFAULT_TIMEOUT_SECS,
            http_connect_timeout_secs: crate::constants::http::DEFAULT_CONNECT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            session_store_path: FileSessionStore::default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_with_fallback() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("warn"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
    }

    #[test]
    fn default_config_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    fn api_client_config_carries_url_and_timeouts() {
        let api = ClientConfig::default().api_client_config();
        assert_eq!(api.base_url, "http://localhost:8080");
        assert_eq!(api.timeout_secs, 30);
        assert_eq!(api.connect_timeout_secs, 10);
    }
}
