//! Progression Resolver
//!
//! Pure functions mapping (exercise, week) to the prescribed load and set
//! count. Key rules:
//! - Load steps up by the exercise's increment every two weeks
//! - Bodyweight movements never progress in load
//! - Compound lifts get a 4th set in phases 3-4, everything else stays at 3
//!
//! Weeks outside 1-8 are not rejected here: load extrapolates along the same
//! step function (week 0 behaves like week 1) and sets fall back to 3.
//! Callers gate on `phase_for_week` before rendering.

use serde::{Serialize, Serializer};

use crate::catalog::ProgressionParams;
use crate::periodization::{phase_for_week, PROGRAM_WEEKS};

/// Sets prescribed when no phase rule applies
pub const BASE_SETS: u32 = 3;

/// Sets prescribed for compound lifts in the back half of the program
pub const COMPOUND_PEAK_SETS: u32 = 4;

/// Weeks per progression step
const WEEKS_PER_STEP: u32 = 2;

// ---------------------------------------------------------------------------
/// Target Load: a weight, or the bodyweight sentinel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetLoad {
    Weight(f64),
    Bodyweight,
}

impl TargetLoad {
    pub fn as_weight(&self) -> Option<f64> {
        match self {
            Self::Weight(w) => Some(*w),
            Self::Bodyweight => None,
        }
    }

    /// Weight recorded when a set is logged at the prescription (0 for BW)
    pub fn logged_weight(&self) -> f64 {
        self.as_weight().unwrap_or(0.0)
    }
}

impl std::fmt::Display for TargetLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weight(w) => write!(f, "{}", w),
            Self::Bodyweight => write!(f, "BW"),
        }
    }
}

// Serialized as a bare number or the string "BW"
impl Serialize for TargetLoad {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Weight(w) => serializer.serialize_f64(*w),
            Self::Bodyweight => serializer.serialize_str("BW"),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Number of completed progression steps by `week`
fn progression_steps(week: u32) -> u32 {
    week.saturating_sub(1) / WEEKS_PER_STEP
}

/// Target load for an exercise in a given week
pub fn target_load(params: &ProgressionParams, week: u32) -> TargetLoad {
    if params.is_bodyweight {
        return TargetLoad::Bodyweight;
    }
    TargetLoad::Weight(params.start_weight + f64::from(progression_steps(week)) * params.increment)
}

/// Number of sets for an exercise in a given week
pub fn target_sets(params: &ProgressionParams, week: u32) -> u32 {
    match phase_for_week(week) {
        Some(phase) if phase.grants_extra_compound_set() && params.is_compound => {
            COMPOUND_PEAK_SETS
        }
        _ => BASE_SETS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekTarget {
    pub week: u32,
    pub load: TargetLoad,
    pub sets: u32,
}

/// Targets for every week of the program (the "Target by Week" strip)
pub fn targets_by_week(params: &ProgressionParams) -> Vec<WeekTarget> {
    (1..=PROGRAM_WEEKS)
        .map(|week| WeekTarget {
            week,
            load: target_load(params, week),
            sets: target_sets(params, week),
        })
        .collect()
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
