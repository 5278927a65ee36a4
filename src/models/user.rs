// ABOUTME: User identity and authentication DTOs
// ABOUTME: Login/registration requests and the token-bearing auth response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

use serde::{Deserialize, Serialize};

/// Authenticated user identity held by the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User email address
    pub email: String,
    /// Granted roles (e.g. "ROLE_USER", "ROLE_ADMIN")
    pub roles: Vec<String>,
}

impl User {
    /// Create a user identity
    #[must_use]
    pub fn new(email: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            email: email.into(),
            roles,
        }
    }
}

/// Credentials for `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Body for `POST /api/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
    /// Display name
    pub name: String,
}

/// Successful response from the login and register endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token
    pub token: String,
    /// Authenticated email
    pub email: String,
    /// Granted roles
    pub roles: Vec<String>,
}

impl AuthResponse {
    /// Split the response into the token and the user identity it describes
    #[must_use]
    pub fn into_parts(self) -> (String, User) {
        let user = User {
            email: self.email,
            roles: self.roles,
        };
        (self.token, user)
    }
}
