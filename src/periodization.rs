//! Periodization Policy
//!
//! Eight weeks split into four two-week phases. The RPE label is
//! informational; the phase number drives the set-count rule.

use serde::Serialize;

/// Length of the program in weeks
pub const PROGRAM_WEEKS: u32 = 8;

/// Compound lifts gain a set from this phase onward
pub const EXTRA_SET_PHASE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub phase: u8,
    pub name: &'static str,
    pub weeks: [u32; 2],
    pub rpe: &'static str,
}

impl Phase {
    pub fn contains(&self, week: u32) -> bool {
        self.weeks.contains(&week)
    }

    /// Phases 3-4 grant compound exercises one additional set
    pub fn grants_extra_compound_set(&self) -> bool {
        self.phase >= EXTRA_SET_PHASE
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Phase {}: {} · RPE {}", self.phase, self.name, self.rpe)
    }
}

pub const PHASES: [Phase; 4] = [
    Phase { phase: 1, name: "Baseline", weeks: [1, 2], rpe: "7-8" },
    Phase { phase: 2, name: "Loading", weeks: [3, 4], rpe: "8" },
    Phase { phase: 3, name: "Intensity", weeks: [5, 6], rpe: "8-9" },
    Phase { phase: 4, name: "Peak", weeks: [7, 8], rpe: "9" },
];

/// Phase containing `week`, or `None` when the week is outside 1-8
pub fn phase_for_week(week: u32) -> Option<&'static Phase> {
    PHASES.iter().find(|p| p.contains(week))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_program_week_has_exactly_one_phase() {
        for week in 1..=PROGRAM_WEEKS {
            let matching = PHASES.iter().filter(|p| p.contains(week)).count();
            assert_eq!(matching, 1, "week {} matched {} phases", week, matching);
            assert!(phase_for_week(week).is_some());
        }
    }

    #[test]
    fn test_out_of_range_weeks_have_no_phase() {
        assert!(phase_for_week(0).is_none());
        assert!(phase_for_week(9).is_none());
        assert!(phase_for_week(52).is_none());
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(phase_for_week(2).map(|p| p.phase), Some(1));
        assert_eq!(phase_for_week(3).map(|p| p.phase), Some(2));
        assert_eq!(phase_for_week(5).map(|p| p.name), Some("Intensity"));
        assert_eq!(phase_for_week(8).map(|p| p.rpe), Some("9"));
    }

    #[test]
    fn test_extra_set_only_in_back_half() {
        let granted: Vec<bool> = PHASES.iter().map(|p| p.grants_extra_compound_set()).collect();
        assert_eq!(granted, vec![false, false, true, true]);
    }

    #[test]
    fn test_phase_label() {
        let label = phase_for_week(6).unwrap().to_string();
        assert_eq!(label, "Phase 3: Intensity · RPE 8-9");
    }
}
