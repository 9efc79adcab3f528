//! Schedule Assembler
//!
//! Combines the catalog, the periodization policy and a user's swaps into a
//! display-ready week: five days, each exercise resolved and carrying its
//! prescribed sets and load. Day order and exercise order follow the catalog
//! exactly. Nothing is cached; every call re-resolves from the swap table it
//! is given.

use serde::Serialize;

use crate::catalog::{program, Catalog, TrainingDay};
use crate::periodization::{phase_for_week, Phase};
use crate::progression::{target_load, target_sets, TargetLoad};
use crate::substitution::{ResolvedExercise, SwapTable};
use crate::workout_log::EntryIndex;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledExercise {
    #[serde(flatten)]
    pub exercise: ResolvedExercise,
    pub sets: u32,
    pub weight: TargetLoad,
}

impl ScheduledExercise {
    pub fn has_set(&self, set_number: u32) -> bool {
        (1..=self.sets).contains(&set_number)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledDay {
    pub day_number: u8,
    pub name: &'static str,
    pub exercises: Vec<ScheduledExercise>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayProgress {
    pub completed: u32,
    pub total: u32,
}

impl DayProgress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

impl ScheduledDay {
    pub fn exercise(&self, original_id: &str) -> Option<&ScheduledExercise> {
        self.exercises
            .iter()
            .find(|e| e.exercise.original_id == original_id)
    }

    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets).sum()
    }

    /// Completed sets over prescribed sets for the day tab badge
    pub fn progress(&self, entries: &EntryIndex) -> DayProgress {
        DayProgress {
            completed: self.exercises.iter().map(|e| entries.completed_sets(e)).sum(),
            total: self.total_sets(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSchedule {
    pub week: u32,
    pub phase: Phase,
    pub days: Vec<ScheduledDay>,
}

impl WeekSchedule {
    pub fn day(&self, day_number: u8) -> Option<&ScheduledDay> {
        self.days.iter().find(|d| d.day_number == day_number)
    }
}

/// Full schedule for `week` as seen by `user_id`; `None` outside weeks 1-8
pub fn week_schedule(week: u32, user_id: &str, swaps: &SwapTable) -> Option<WeekSchedule> {
    week_schedule_from(program(), week, user_id, swaps)
}

fn week_schedule_from(
    catalog: &Catalog,
    week: u32,
    user_id: &str,
    swaps: &SwapTable,
) -> Option<WeekSchedule> {
    let phase = phase_for_week(week)?;
    let days = catalog
        .days()
        .iter()
        .map(|day| assemble_day(catalog, day, week, user_id, swaps))
        .collect();

    Some(WeekSchedule {
        week,
        phase: *phase,
        days,
    })
}

fn assemble_day(
    catalog: &Catalog,
    day: &TrainingDay,
    week: u32,
    user_id: &str,
    swaps: &SwapTable,
) -> ScheduledDay {
    let exercises = day
        .exercises
        .iter()
        .filter_map(|id| catalog.get(id))
        .map(|definition| {
            let exercise = swaps.resolve(user_id, definition);
            ScheduledExercise {
                sets: target_sets(&exercise.progression, week),
                weight: target_load(&exercise.progression, week),
                exercise,
            }
        })
        .collect();

    ScheduledDay {
        day_number: day.day_number,
        name: day.name,
        exercises,
    }
}
