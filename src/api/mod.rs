// ABOUTME: REST boundary client for the ZRun backend API
// ABOUTME: Re-exports the typed client, its configuration, and error mapping helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

//! # API Client
//!
//! Typed client over the external ZRun REST API: authentication
//! (login/register/validate) and plan submission/retrieval. Every non-2xx
//! response is parsed into a structured [`ApiError`](crate::errors::ApiError)
//! rather than surfaced as raw text, and is never silently swallowed.

mod client;

pub use client::{
    map_login_failure, map_register_failure, parse_api_error, ApiClientConfig, ZrunApiClient,
};
