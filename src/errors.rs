// ABOUTME: Unified error handling for the zrun-client crate
// ABOUTME: Validation, authentication, API boundary, and storage error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

//! # Error Handling
//!
//! Three error families cross this crate's boundaries:
//!
//! - [`ValidationError`] - field-scoped, user-correctable; the plan engine
//!   returns these as a list so a form can surface every problem at once.
//! - [`AuthError`] - credential and token failures; distinguishes
//!   user-correctable bad credentials from transient server/network faults.
//! - [`ApiError`] - generic REST boundary error carrying the HTTP status and
//!   an optional machine code parsed from the response body.
//!
//! [`ClientError`] is the umbrella type; [`ClientResult`] the crate-wide alias.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using the unified error type
pub type ClientResult<T> = Result<T, ClientError>;

/// A single field-scoped validation failure
///
/// Validation errors are values, not exceptions: the plan engine collects
/// them into a list instead of failing on the first rule, mirroring how a
/// form shows every invalid field simultaneously.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Machine-readable field tag (e.g. "targetTime", "raceDistance")
    pub field: String,
    /// Human-readable message for display next to the field
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for the given field
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Authentication and session errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Credentials were rejected by the login endpoint (HTTP 401)
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// The email is already registered (HTTP 409 on the register endpoint)
    #[error("This email is already in use.")]
    AlreadyRegistered,

    /// The stored token failed remote validation
    #[error("session token is no longer valid")]
    InvalidToken,

    /// The server reported a fault while authenticating
    #[error("An internal server error occurred. Please try again later.")]
    ServerFault {
        /// HTTP status returned by the server
        status: u16,
    },

    /// The authentication endpoint could not be reached
    #[error("Failed to connect to the server: {reason}")]
    Network {
        /// Underlying transport failure description
        reason: String,
    },
}

impl AuthError {
    /// Whether the user can fix this by retyping their input
    #[must_use]
    pub const fn is_user_correctable(&self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::AlreadyRegistered)
    }
}

/// Structured error parsed from a non-2xx REST response
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    /// Display message, from the response body when available
    pub message: String,
    /// HTTP status code of the failed response
    pub status: u16,
    /// Optional machine-readable code supplied by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    /// Create an API error with a message and status
    #[must_use]
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
            code: None,
        }
    }

    /// Attach a machine-readable code
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Unified error type for all client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// One or more fields failed validation
    #[error("validation failed: {}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Authentication failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// REST boundary failure
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Durable session storage failure
    #[error("session storage error: {message}")]
    Storage {
        /// What went wrong in the storage backend
        message: String,
    },
}

impl ClientError {
    /// Create a storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

// Transport failures on plan endpoints surface as a generic 500 ApiError,
// matching what the UI has always displayed for unreachable-server cases
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Api(ApiError::new(format!("Network error: {err}"), 500))
    }
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_field_and_message() {
        let err = ValidationError::new("name", "Plan name is required.");
        assert_eq!(err.to_string(), "name: Plan name is required.");
    }

    #[test]
    fn client_error_joins_validation_list() {
        let err = ClientError::Validation(vec![
            ValidationError::new("name", "Plan name is required."),
            ValidationError::new("targetTime", "Please enter a valid target time."),
        ]);
        let rendered = err.to_string();
        assert!(rendered.contains("name: Plan name is required."));
        assert!(rendered.contains("targetTime: Please enter a valid target time."));
    }

    #[test]
    fn auth_error_classifies_correctable_failures() {
        assert!(AuthError::InvalidCredentials.is_user_correctable());
        assert!(AuthError::AlreadyRegistered.is_user_correctable());
        assert!(!AuthError::ServerFault { status: 500 }.is_user_correctable());
        assert!(!AuthError::Network {
            reason: "connection refused".into()
        }
        .is_user_correctable());
    }
}
