// ABOUTME: Main library entry point for the zrun-client crate
// ABOUTME: Training-plan configuration engine and session lifecycle for the ZRun API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

#![deny(unsafe_code)]

//! # ZRun Client
//!
//! Client library for the ZRun training-plan service. Two components do the
//! real work; everything else is ambient plumbing:
//!
//! - **Plan configuration engine** ([`plan`]): validates raw form input,
//!   resolves a canonical kilometer distance and a canonical start/end date
//!   pair from partially redundant input, and yields a submit-ready
//!   [`NormalizedPlanRequest`](models::NormalizedPlanRequest). Pure and
//!   stateless; validation failures come back as a field-tagged list so a
//!   form can surface every problem at once.
//! - **Session manager** ([`session`]): single source of truth for "is this
//!   client authenticated". Hydrates from durable storage, revalidates the
//!   token remotely at most once per 30 minutes, and fails closed on any
//!   ambiguous validation outcome.
//!
//! The [`api`] module is the REST boundary to the backend (an external
//! collaborator): login, registration, token validation, and plan
//! submission/retrieval.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use zrun_client::api::{ApiClientConfig, ZrunApiClient};
//! use zrun_client::session::{FileSessionStore, SessionManager};
//!
//! # async fn example() {
//! let api = Arc::new(ZrunApiClient::new(ApiClientConfig::default()));
//! let store = Arc::new(FileSessionStore::new(FileSessionStore::default_path()));
//! let sessions = SessionManager::new(store, api.clone());
//!
//! let status = sessions.bootstrap().await;
//! if status.is_authenticated {
//!     println!("welcome back, {}", status.user.map_or_else(String::new, |u| u.email));
//! }
//! # }
//! ```

/// REST boundary client for the ZRun backend
pub mod api;
/// Environment-based client configuration
pub mod config;
/// System-wide constants
pub mod constants;
/// Unified error handling
pub mod errors;
/// Structured logging setup
pub mod logging;
/// Core data models
pub mod models;
/// Plan configuration engine
pub mod plan;
/// Session lifecycle management
pub mod session;
