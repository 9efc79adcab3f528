//! Program browsing: week schedules, phases and per-exercise targets

use crate::catalog::{program, ExerciseDefinition};
use crate::commands::current_swaps;
use crate::db::AppState;
use crate::periodization::{phase_for_week, Phase};
use crate::progression::{targets_by_week, WeekTarget};
use crate::schedule::{week_schedule, WeekSchedule};

/// Resolved schedule for a week; `None` when the week is outside the program
pub async fn get_week_schedule(
  state: &AppState,
  user_id: &str,
  week: u32,
) -> Result<Option<WeekSchedule>, String> {
  let swaps = current_swaps(state, user_id).await?;
  Ok(week_schedule(week, user_id, &swaps))
}

pub fn get_phase(week: u32) -> Option<Phase> {
  phase_for_week(week).copied()
}

/// Load and set targets for weeks 1-8
pub fn get_exercise_targets(exercise_id: &str) -> Result<Vec<WeekTarget>, String> {
  program()
    .get(exercise_id)
    .map(|e| targets_by_week(&e.progression))
    .ok_or_else(|| format!("Exercise not found: {}", exercise_id))
}

pub fn list_exercises() -> Vec<&'static ExerciseDefinition> {
  program().all_exercises().collect()
}
