// ABOUTME: Core data models for the zrun-client crate
// ABOUTME: Re-exports plan request/response and user/auth types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

//! # Data Models
//!
//! Core data structures shared by the plan engine, the session manager, and
//! the REST client.
//!
//! ## Design Principles
//!
//! - **Canonical storage**: distances are always kilometers on the wire;
//!   the display unit affects input parsing and presentation only.
//! - **States made unrepresentable**: race selection is a tagged union, so
//!   "standard race with a custom distance" cannot be constructed.
//! - **Serializable**: every wire-facing model uses camelCase JSON to match
//!   the existing backend.

mod plan;
mod user;

pub use plan::{
    DisplayUnit, NormalizedPlanRequest, PlanLengthMode, PlanRequest, RaceSelection, StandardRace,
    TargetGoal, TargetTime, TrainingPlan, Workout,
};
pub use user::{AuthResponse, LoginRequest, RegistrationRequest, User};
