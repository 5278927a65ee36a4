// ABOUTME: System-wide constants for the zrun-client crate
// ABOUTME: Race distance table, plan limits, unit conversion factors, and session storage keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! This module provides both hardcoded constants and environment variable configuration.

use std::env;

/// Canonical race distances in kilometers
///
/// These are the stored/transmitted values; display preference never changes them.
pub mod races {
    /// 5k road race
    pub const FIVE_K_KM: f64 = 5.0;
    /// 10k road race
    pub const TEN_K_KM: f64 = 10.0;
    /// Half marathon (21.0975 km / 13.1 mi)
    pub const HALF_MARATHON_KM: f64 = 21.0975;
    /// Marathon (42.195 km / 26.2 mi)
    pub const MARATHON_KM: f64 = 42.195;
    /// 50k ultra
    pub const FIFTY_K_KM: f64 = 50.0;
    /// 100k ultra
    pub const HUNDRED_K_KM: f64 = 100.0;
}

/// Plan configuration limits
pub mod plan {
    /// Selectable plan lengths in weeks
    pub const PLAN_LENGTH_WEEKS: [u32; 5] = [8, 12, 16, 20, 24];

    /// Minimum training days per week
    pub const MIN_TRAINING_FREQUENCY: u32 = 1;
    /// Maximum training days per week
    pub const MAX_TRAINING_FREQUENCY: u32 = 7;

    /// Maximum hours component of a target time
    pub const MAX_TARGET_HOURS: u32 = 99;
    /// Maximum minutes component of a target time
    pub const MAX_TARGET_MINUTES: u32 = 59;
    /// Maximum seconds component of a target time
    pub const MAX_TARGET_SECONDS: u32 = 59;

    /// How far into the future a plan may start or end, in years
    pub const MAX_HORIZON_YEARS: u32 = 1;
}

/// Unit conversion factors
///
/// These two literals are deliberately NOT exact reciprocals of each other.
/// Both directions are specified independently so that displayed values stay
/// byte-for-byte identical to what the backend has always produced.
pub mod units {
    /// Kilometers to miles display factor
    pub const KM_TO_MILES: f64 = 0.621_371;
    /// Miles to kilometers input factor
    pub const MILES_TO_KM: f64 = 1.609_34;
}

/// Session lifecycle constants
pub mod session {
    /// How long a validated token is trusted without a new remote check, in milliseconds
    pub const REVALIDATION_INTERVAL_MS: i64 = 30 * 60 * 1000;

    /// Durable storage key for the bearer token
    pub const KEY_TOKEN: &str = "token";
    /// Durable storage key for the JSON-serialized user
    pub const KEY_USER: &str = "user";
    /// Durable storage key for the last validation timestamp (epoch milliseconds, as a string)
    pub const KEY_LAST_VALIDATION: &str = "lastValidation";
}

/// HTTP client defaults
pub mod http {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Get the API base URL from environment or default
    #[must_use]
    pub fn api_base_url() -> String {
        env::var("ZRUN_API_URL").unwrap_or_else(|_| "http://localhost:8080".into())
    }

    /// Get the log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    }

    /// Get the HTTP request timeout from environment or default
    #[must_use]
    pub fn http_timeout_secs() -> u64 {
        env::var("ZRUN_HTTP_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(super::http::DEFAULT_TIMEOUT_SECS)
    }

    /// Get the HTTP connect timeout from environment or default
    #[must_use]
    pub fn http_connect_timeout_secs() -> u64 {
        env::var("ZRUN_HTTP_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(super::http::DEFAULT_CONNECT_TIMEOUT_SECS)
    }
}

/// Service identity constants
pub mod service {
    /// Client name reported in logs
    pub const CLIENT_NAME: &str = "zrun-client";

    /// Client version from Cargo.toml
    pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
}
