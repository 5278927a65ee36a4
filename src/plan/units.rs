// ABOUTME: Distance unit conversion between canonical kilometers and display units
// ABOUTME: Uses the fixed literal factors the backend has always displayed with
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

//! Distance unit conversion helpers.
//!
//! The two factors are independent literals, not reciprocals of each other
//! (0.621371 vs 1.60934). Deriving one from the other would shift values
//! users already see, so both directions use their own constant.

use crate::constants::units::{KM_TO_MILES, MILES_TO_KM};
use crate::models::DisplayUnit;

/// Convert a user-entered distance in the given display unit to kilometers
#[must_use]
pub fn to_kilometers(distance: f64, unit: DisplayUnit) -> f64 {
    match unit {
        DisplayUnit::Metric => distance,
        DisplayUnit::Imperial => distance * MILES_TO_KM,
    }
}

/// Convert a canonical kilometer distance to the given display unit
#[must_use]
pub fn from_kilometers(distance_km: f64, unit: DisplayUnit) -> f64 {
    match unit {
        DisplayUnit::Metric => distance_km,
        DisplayUnit::Imperial => distance_km * KM_TO_MILES,
    }
}
