// ABOUTME: Training-plan request and response models
// ABOUTME: Race selection, target goal/time, plan length mode, and server-side plan records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::races;
use crate::errors::ValidationError;

/// User-facing distance unit, used for input parsing and presentation only
///
/// Never persisted with a plan; the canonical stored distance is always
/// kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayUnit {
    /// Kilometers
    #[default]
    #[serde(rename = "km")]
    Metric,
    /// Miles
    #[serde(rename = "mi")]
    Imperial,
}

/// Standard race distances with fixed canonical kilometer values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandardRace {
    /// 5k road race
    #[serde(rename = "5k")]
    FiveK,
    /// 10k road race
    #[serde(rename = "10k")]
    TenK,
    /// Half marathon
    #[serde(rename = "Half Marathon")]
    HalfMarathon,
    /// Marathon
    #[serde(rename = "Marathon")]
    Marathon,
    /// 50k ultra
    #[serde(rename = "50k")]
    FiftyK,
    /// 100k ultra
    #[serde(rename = "100k")]
    HundredK,
}

impl StandardRace {
    /// Canonical distance in kilometers
    #[must_use]
    pub const fn distance_km(self) -> f64 {
        match self {
            Self::FiveK => races::FIVE_K_KM,
            Self::TenK => races::TEN_K_KM,
            Self::HalfMarathon => races::HALF_MARATHON_KM,
            Self::Marathon => races::MARATHON_KM,
            Self::FiftyK => races::FIFTY_K_KM,
            Self::HundredK => races::HUNDRED_K_KM,
        }
    }

    /// Display label, matching the backend's race keys
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FiveK => "5k",
            Self::TenK => "10k",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
            Self::FiftyK => "50k",
            Self::HundredK => "100k",
        }
    }

    /// All standard races, in increasing distance order
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::FiveK,
            Self::TenK,
            Self::HalfMarathon,
            Self::Marathon,
            Self::FiftyK,
            Self::HundredK,
        ]
    }
}

impl fmt::Display for StandardRace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StandardRace {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5k" => Ok(Self::FiveK),
            "10k" => Ok(Self::TenK),
            "Half Marathon" => Ok(Self::HalfMarathon),
            "Marathon" => Ok(Self::Marathon),
            "50k" => Ok(Self::FiftyK),
            "100k" => Ok(Self::HundredK),
            _ => Err(ValidationError::new("raceDistance", "unknown race distance")),
        }
    }
}

/// Race selection as a tagged union
///
/// Modeling this as two optional fields on the request would reintroduce the
/// "exactly one populated" invariant as a runtime check; the union makes the
/// invalid combinations unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "raceType", rename_all = "lowercase")]
pub enum RaceSelection {
    /// One of the fixed standard race distances
    Standard {
        /// Selected race
        #[serde(rename = "raceDistance")]
        race: StandardRace,
    },
    /// A custom race distance, entered in the user's display unit
    Custom {
        /// Distance as typed by the user (display unit, not yet canonical)
        #[serde(rename = "customDistance")]
        distance: f64,
    },
}

/// What the runner is training toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetGoal {
    /// Finish the race; no target time
    #[default]
    Completion,
    /// Beat a previous personal record
    #[serde(rename = "Personal Best")]
    PersonalBest,
    /// Hit a qualification standard (e.g. Boston qualifier)
    #[serde(rename = "Qualification Time")]
    QualificationTime,
}

impl TargetGoal {
    /// Whether this goal requires a non-zero target time
    #[must_use]
    pub const fn requires_target_time(self) -> bool {
        matches!(self, Self::PersonalBest | Self::QualificationTime)
    }
}

/// Target finish time, split into display components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TargetTime {
    /// Hours component (0-99)
    pub hours: u32,
    /// Minutes component (0-59)
    pub minutes: u32,
    /// Seconds component (0-59)
    pub seconds: u32,
}

impl TargetTime {
    /// All-zero time, the canonical value for completion-goal plans
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Create a target time from components
    #[must_use]
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Whether every component is zero
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for TargetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Whether the schedule is anchored by its start date or its end date
///
/// The other bound is always derived from the plan length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlanLengthMode {
    /// User supplies the start date; end date is derived
    #[default]
    #[serde(rename = "startDate")]
    ByStartDate,
    /// User supplies the end date (race day); start date is derived
    #[serde(rename = "endDate")]
    ByEndDate,
}

/// Raw user input for a training-plan request
///
/// Mutable while the form is being edited; [`normalize`] turns it into a
/// submit-ready [`NormalizedPlanRequest`]. Exactly one of the two dates is
/// user-supplied per [`PlanLengthMode`]; the other is derived.
///
/// [`normalize`]: crate::plan::normalize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Plan name; must be non-empty after trimming
    pub name: String,
    /// Standard or custom race selection
    #[serde(flatten)]
    pub race: RaceSelection,
    /// Training goal
    pub target_goal: TargetGoal,
    /// Target finish time; required (non-zero) iff the goal demands one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<TargetTime>,
    /// Which date bound the user is anchoring on
    pub plan_length_mode: PlanLengthMode,
    /// Training start date (user-supplied iff mode is `ByStartDate`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_start_date: Option<NaiveDate>,
    /// Training end date (user-supplied iff mode is `ByEndDate`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_end_date: Option<NaiveDate>,
    /// Plan length in weeks; one of {8, 12, 16, 20, 24}
    pub plan_length_weeks: u32,
    /// Training days per week (1-7)
    pub training_frequency: u32,
    /// Presentation unit for distance input; never persisted with the plan
    #[serde(skip)]
    pub display_unit: DisplayUnit,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            race: RaceSelection::Standard {
                race: StandardRace::FiveK,
            },
            target_goal: TargetGoal::Completion,
            target_time: None,
            plan_length_mode: PlanLengthMode::ByStartDate,
            training_start_date: None,
            training_end_date: None,
            plan_length_weeks: 12,
            training_frequency: 3,
            display_unit: DisplayUnit::Metric,
        }
    }
}

/// Submit-ready plan request with every derived field populated
///
/// Produced only by [`normalize`]; `distance_in_km` is always positive and
/// both dates are always present, whichever one the user entered.
///
/// [`normalize`]: crate::plan::normalize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPlanRequest {
    /// Trimmed plan name
    pub name: String,
    /// Original race selection, kept for server-side labeling
    #[serde(flatten)]
    pub race: RaceSelection,
    /// Canonical resolved distance in kilometers, always > 0
    pub distance_in_km: f64,
    /// Training goal
    pub target_goal: TargetGoal,
    /// Target time; all-zero when the goal is `Completion`
    pub target_time: TargetTime,
    /// Plan start date (entered or derived)
    pub training_start_date: NaiveDate,
    /// Plan end date (entered or derived)
    pub training_end_date: NaiveDate,
    /// Plan length in weeks
    pub plan_length_weeks: u32,
    /// Training days per week
    pub training_frequency: u32,
}

/// A training plan as returned by the backend
///
/// The workout list is generated server-side; this client only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    /// Server-assigned plan identifier
    pub id: String,
    /// Owning user identifier
    pub user_id: String,
    /// Plan name
    pub name: String,
    /// First day of training
    pub start_date: NaiveDateTime,
    /// Last day of training (race day)
    pub end_date: NaiveDateTime,
    /// Race distance in kilometers
    pub distance_km: f64,
    /// Training goal
    pub target_goal: TargetGoal,
    /// Target time, absent for completion-goal plans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<TargetTime>,
    /// Training days per week
    pub training_frequency: u32,
    /// Generated workout schedule
    #[serde(default)]
    pub workouts: Vec<Workout>,
    /// Creation timestamp
    pub created_at: NaiveDateTime,
    /// Last-update timestamp
    pub updated_at: NaiveDateTime,
}

/// A single scheduled workout within a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Server-assigned workout identifier
    pub id: String,
    /// Workout type (e.g. "Long Run", "Tempo Run")
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Free-form description
    pub description: String,
    /// Planned distance in kilometers
    pub distance_km: f64,
    /// When the workout is scheduled
    pub scheduled_date: NaiveDateTime,
    /// Whether the runner has marked it done
    pub completed: bool,
}
