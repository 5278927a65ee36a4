// ABOUTME: Plan configuration engine for turning form input into a submit-ready plan request
// ABOUTME: Distance resolution, date-range reconciliation, and target-time validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

//! # Plan Configuration Engine
//!
//! Pure, stateless validation and derivation over a [`PlanRequest`]:
//! the engine holds no state between submissions and performs no I/O.
//! Callers invoke [`normalize`] on submit (or any individual rule on field
//! change) and get back either a fully populated
//! [`NormalizedPlanRequest`](crate::models::NormalizedPlanRequest) or the
//! complete list of failing rules.
//!
//! [`PlanRequest`]: crate::models::PlanRequest

mod engine;
pub mod units;

pub use engine::{
    normalize, reconcile_date_range, resolve_distance_km, validate_target_time, DateRange,
};
