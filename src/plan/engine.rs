// ABOUTME: Core plan validation and derived-field computation
// ABOUTME: Resolves canonical distance, reconciles the date range, and collects all rule failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

use chrono::{Duration, Months, NaiveDate};

use crate::constants::plan::{
    MAX_HORIZON_YEARS, MAX_TARGET_HOURS, MAX_TARGET_MINUTES, MAX_TARGET_SECONDS,
    MAX_TRAINING_FREQUENCY, MIN_TRAINING_FREQUENCY, PLAN_LENGTH_WEEKS,
};
use crate::errors::ValidationError;
use crate::models::{
    DisplayUnit, NormalizedPlanRequest, PlanLengthMode, PlanRequest, RaceSelection, TargetGoal,
    TargetTime,
};
use crate::plan::units::to_kilometers;

/// A reconciled start/end date pair
///
/// Invariant: `end = start + plan_length_weeks` weeks, regardless of which
/// bound the user entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day of training
    pub start: NaiveDate,
    /// Last day of training (race day)
    pub end: NaiveDate,
}

/// Resolve the canonical kilometer distance for a race selection
///
/// Standard races use the fixed table values exactly. Custom distances are
/// entered in the user's display unit and converted to kilometers; the
/// positivity check runs on the raw entered value, with no rounding
/// tolerance, before conversion.
///
/// # Errors
///
/// Returns a field-tagged [`ValidationError`] when a custom distance is not
/// positive. (An unknown standard-race label is rejected earlier, when the
/// label is parsed into [`StandardRace`](crate::models::StandardRace).)
pub fn resolve_distance_km(
    race: RaceSelection,
    display_unit: DisplayUnit,
) -> Result<f64, ValidationError> {
    match race {
        RaceSelection::Standard { race } => Ok(race.distance_km()),
        RaceSelection::Custom { distance } => {
            if distance <= 0.0 {
                return Err(ValidationError::new(
                    "customDistance",
                    "distance must be positive",
                ));
            }
            Ok(to_kilometers(distance, display_unit))
        }
    }
}

/// Derive the non-authoritative date bound and check the allowed window
///
/// `ByStartDate` derives the end date, `ByEndDate` derives the start date;
/// either way the result satisfies `end = start + plan_length_weeks` weeks.
/// Out-of-window dates are reported, never auto-corrected: the start must
/// fall in `[today, today + 1 year]` and the end in
/// `[today + plan_length_weeks, today + 1 year]`.
///
/// Callers that let the user switch modes are expected to clear the
/// previously derived field themselves; this function stays stateless and
/// reports a missing authoritative date as a field-tagged error, which is
/// what forces the form to re-prompt.
///
/// # Errors
///
/// Returns a field-tagged [`ValidationError`] when the authoritative date
/// for the mode is missing or either bound falls outside the allowed window.
pub fn reconcile_date_range(
    mode: PlanLengthMode,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    plan_length_weeks: u32,
    today: NaiveDate,
) -> Result<DateRange, ValidationError> {
    let plan_length = Duration::weeks(i64::from(plan_length_weeks));

    // Checked arithmetic throughout: a date so extreme that the derived
    // bound is unrepresentable is out of the allowed window by definition
    let range = match mode {
        PlanLengthMode::ByStartDate => {
            let start = start.ok_or_else(|| {
                ValidationError::new(
                    "trainingStartDate",
                    "Please select a start date for your training plan.",
                )
            })?;
            let end = start.checked_add_signed(plan_length).ok_or_else(|| {
                ValidationError::new("trainingStartDate", "date out of allowed range")
            })?;
            DateRange { start, end }
        }
        PlanLengthMode::ByEndDate => {
            let end = end.ok_or_else(|| {
                ValidationError::new(
                    "trainingEndDate",
                    "Please select an end date for your training plan.",
                )
            })?;
            let start = end.checked_sub_signed(plan_length).ok_or_else(|| {
                ValidationError::new("trainingEndDate", "date out of allowed range")
            })?;
            DateRange { start, end }
        }
    };

    let horizon = today
        .checked_add_months(Months::new(12 * MAX_HORIZON_YEARS))
        .unwrap_or(NaiveDate::MAX);
    if range.start < today || range.start > horizon {
        return Err(ValidationError::new(
            "trainingStartDate",
            "date out of allowed range",
        ));
    }
    let earliest_end = today.checked_add_signed(plan_length).ok_or_else(|| {
        ValidationError::new("trainingEndDate", "date out of allowed range")
    })?;
    if range.end < earliest_end || range.end > horizon {
        return Err(ValidationError::new(
            "trainingEndDate",
            "date out of allowed range",
        ));
    }

    Ok(range)
}

/// Check that the target time matches the goal
///
/// A completion goal accepts any time, including none; the caller resets it
/// to zero during normalization. Personal-best and qualification goals
/// require a non-zero time. Component bounds (99h/59m/59s) are enforced
/// whenever a time is present, whatever the goal.
///
/// # Errors
///
/// Returns a [`ValidationError`] tagged `targetTime` when a required time is
/// missing or all-zero, or when a component is out of bounds.
pub fn validate_target_time(
    goal: TargetGoal,
    time: Option<TargetTime>,
) -> Result<(), ValidationError> {
    if let Some(time) = time {
        if time.hours > MAX_TARGET_HOURS
            || time.minutes > MAX_TARGET_MINUTES
            || time.seconds > MAX_TARGET_SECONDS
        {
            return Err(ValidationError::new(
                "targetTime",
                "Please enter a valid target time.",
            ));
        }
    }

    if goal.requires_target_time() && time.map_or(true, TargetTime::is_zero) {
        return Err(ValidationError::new("targetTime", "target time required"));
    }

    Ok(())
}

/// Validate an entire plan request and compute every derived field
///
/// Runs all rules and collects every failure into a field-tagged list, so a
/// form can render each problem next to its field in one pass; nothing
/// short-circuits. On success the returned record has `distance_in_km`
/// resolved, both dates populated, and the target time forced to all-zero
/// for completion-goal plans.
///
/// # Errors
///
/// Returns the complete list of failing rules when any rule fails.
pub fn normalize(
    request: &PlanRequest,
    today: NaiveDate,
) -> Result<NormalizedPlanRequest, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = request.name.trim();
    if name.is_empty() {
        errors.push(ValidationError::new("name", "Plan name is required."));
    }

    let distance_in_km = match resolve_distance_km(request.race, request.display_unit) {
        Ok(km) => Some(km),
        Err(err) => {
            errors.push(err);
            None
        }
    };

    if !PLAN_LENGTH_WEEKS.contains(&request.plan_length_weeks) {
        errors.push(ValidationError::new(
            "planLength",
            "Please select one of the available plan lengths.",
        ));
    }

    if request.training_frequency < MIN_TRAINING_FREQUENCY
        || request.training_frequency > MAX_TRAINING_FREQUENCY
    {
        errors.push(ValidationError::new(
            "trainingFrequency",
            "Training frequency must be between 1 and 7 days per week.",
        ));
    }

    let range = match reconcile_date_range(
        request.plan_length_mode,
        request.training_start_date,
        request.training_end_date,
        request.plan_length_weeks,
        today,
    ) {
        Ok(range) => Some(range),
        Err(err) => {
            errors.push(err);
            None
        }
    };

    if let Err(err) = validate_target_time(request.target_goal, request.target_time) {
        errors.push(err);
    }

    let target_time = if request.target_goal.requires_target_time() {
        request.target_time.unwrap_or_else(TargetTime::zero)
    } else {
        TargetTime::zero()
    };

    // Both options are populated whenever their rules passed
    match (errors.is_empty(), distance_in_km, range) {
        (true, Some(distance_in_km), Some(range)) => Ok(NormalizedPlanRequest {
            name: name.to_owned(),
            race: request.race,
            distance_in_km,
            target_goal: request.target_goal,
            target_time,
            training_start_date: range.start,
            training_end_date: range.end,
            plan_length_weeks: request.plan_length_weeks,
            training_frequency: request.training_frequency,
        }),
        _ => Err(errors),
    }
}
