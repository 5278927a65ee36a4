// ABOUTME: Typed REST client for authentication and training-plan endpoints
// ABOUTME: Maps non-2xx responses into structured AuthError/ApiError values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::constants::env_config;
use crate::errors::{ApiError, AuthError, ClientError, ClientResult};
use crate::models::{
    AuthResponse, LoginRequest, NormalizedPlanRequest, RegistrationRequest, TrainingPlan,
};
use crate::session::TokenValidator;

/// API client configuration
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the ZRun backend (e.g. `http://localhost:8080`)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: env_config::api_base_url(),
            timeout_secs: env_config::http_timeout_secs(),
            connect_timeout_secs: env_config::http_connect_timeout_secs(),
        }
    }
}

/// Typed client over the ZRun REST API
///
/// Holds no session state of its own: callers pass the bearer token for
/// authenticated endpoints, usually straight from
/// [`SessionManager::token`](crate::session::SessionManager::token).
#[derive(Debug, Clone)]
pub struct ZrunApiClient {
    base_url: String,
    client: Client,
}

/// Error body shape the backend returns for structured failures
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
    code: Option<String>,
}

impl ZrunApiClient {
    /// Create a client from configuration
    ///
    /// The underlying [`Client`] pools connections, so one `ZrunApiClient`
    /// should be built and shared rather than constructed per request.
    #[must_use]
    pub fn new(config: ApiClientConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    /// Create a client against the given base URL
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(ApiClientConfig {
            base_url: base_url.into(),
            ..ApiClientConfig::default()
        })
    }

    /// Authenticate with email and password
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on 401,
    /// [`AuthError::ServerFault`] on other non-2xx statuses, and
    /// [`AuthError::Network`] when the endpoint is unreachable
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, AuthError> {
        let url = format!("{}/api/auth/login", self.base_url);
        debug!(%url, "submitting login request");

        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Network {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_login_failure(status));
        }

        response.json().await.map_err(|e| AuthError::Network {
            reason: e.to_string(),
        })
    }

    /// Register a new account
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AlreadyRegistered`] on 409,
    /// [`AuthError::ServerFault`] on other non-2xx statuses, and
    /// [`AuthError::Network`] when the endpoint is unreachable
    pub async fn register(&self, request: &RegistrationRequest) -> Result<AuthResponse, AuthError> {
        let url = format!("{}/api/auth/register", self.base_url);
        debug!(%url, "submitting registration request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AuthError::Network {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_register_failure(status));
        }

        response.json().await.map_err(|e| AuthError::Network {
            reason: e.to_string(),
        })
    }

    /// Submit a normalized plan request
    ///
    /// # Errors
    ///
    /// Returns a structured [`ApiError`] for non-2xx responses
    pub async fn create_plan(
        &self,
        token: &str,
        plan: &NormalizedPlanRequest,
    ) -> ClientResult<TrainingPlan> {
        let url = format!("{}/api/plans", self.base_url);
        debug!(%url, plan_name = %plan.name, "submitting plan");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(plan)
            .send()
            .await?;

        Self::read_json(response).await
    }

    /// Fetch all plans for the authenticated user
    ///
    /// # Errors
    ///
    /// Returns a structured [`ApiError`] for non-2xx responses
    pub async fn get_plans(&self, token: &str) -> ClientResult<Vec<TrainingPlan>> {
        let url = format!("{}/api/plans", self.base_url);
        let response = self.client.get(&url).bearer_auth(token).send().await?;
        Self::read_json(response).await
    }

    /// Fetch a single plan, including its server-generated workout list
    ///
    /// # Errors
    ///
    /// Returns a structured [`ApiError`] for non-2xx responses
    pub async fn get_plan(&self, token: &str, plan_id: &str) -> ClientResult<TrainingPlan> {
        let url = format!("{}/api/plans/{plan_id}", self.base_url);
        let response = self.client.get(&url).bearer_auth(token).send().await?;
        Self::read_json(response).await
    }

    /// Parse a 2xx response body, or map a failure into `ApiError`
    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(ToOwned::to_owned);
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(parse_api_error(
                status.as_u16(),
                content_type.as_deref(),
                &body,
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Api(ApiError::new(format!("invalid response body: {e}"), status.as_u16())))
    }
}

#[async_trait]
impl TokenValidator for ZrunApiClient {
    async fn validate(&self, token: &str) -> Result<(), AuthError> {
        let url = format!("{}/api/auth/validate", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::Network {
                reason: e.to_string(),
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

/// Map a failed login response status to its [`AuthError`]
///
/// 401 means the credentials were rejected; any other non-2xx status is a
/// server-side fault the user cannot correct.
#[must_use]
pub fn map_login_failure(status: StatusCode) -> AuthError {
    match status {
        StatusCode::UNAUTHORIZED => AuthError::InvalidCredentials,
        other => AuthError::ServerFault {
            status: other.as_u16(),
        },
    }
}

/// Map a failed registration response status to its [`AuthError`]
///
/// 409 means the email is already taken; any other non-2xx status is a
/// server-side fault.
#[must_use]
pub fn map_register_failure(status: StatusCode) -> AuthError {
    match status {
        StatusCode::CONFLICT => AuthError::AlreadyRegistered,
        other => AuthError::ServerFault {
            status: other.as_u16(),
        },
    }
}

/// Parse a non-2xx response body into a structured [`ApiError`]
///
/// JSON bodies contribute their `message` (or `error`) and `code` fields;
/// anything else is taken as raw text. An empty or unparsable body falls
/// back to a generic `Error {status}` message.
#[must_use]
pub fn parse_api_error(status: u16, content_type: Option<&str>, body: &str) -> ApiError {
    if content_type.is_some_and(|ct| ct.contains("application/json")) {
        if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
            let message = parsed
                .message
                .or(parsed.error)
                .unwrap_or_else(|| "An error occurred".to_owned());
            let error = ApiError::new(message, status);
            return match parsed.code {
                Some(code) => error.with_code(code),
                None => error,
            };
        }
    }

    if body.is_empty() {
        ApiError::new(format!("Error {status}"), status)
    } else {
        ApiError::new(body, status)
    }
}
