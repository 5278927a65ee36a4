// ABOUTME: Session lifecycle management with durable storage and bounded revalidation
// ABOUTME: Re-exports the session manager, status types, and storage port
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

//! # Session Management
//!
//! Single source of truth for "is this client authenticated".
//!
//! The [`SessionManager`] owns the bearer token and user identity, hydrates
//! them from a durable [`SessionStore`] at application start, and revalidates
//! the token against a [`TokenValidator`] at most once per 30-minute window.
//! Ambiguous validation outcomes (network errors included) are treated as an
//! invalid token: the session fails closed into a forced logout.

mod manager;
mod store;

pub use manager::{SessionManager, SessionPhase, SessionStatus, TokenValidator};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
