//! Workout page: load everything for a week/day at once, log sets

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::catalog::program;
use crate::db::AppState;
use crate::models::{ReadinessEntry, WorkoutEntry};
use crate::periodization::Phase;
use crate::readiness::load_readiness;
use crate::schedule::{week_schedule, DayProgress, ScheduledDay, WeekSchedule};
use crate::substitution::{load_swaps, SwapTable};
use crate::workout_log::{
  self, load_entries, load_history, progress_by_week, weekly_volume, EntryEdit, EntryIndex, SetRef,
  WeekProgress, WeeklyVolume,
};

/// Default look-back for the weekly volume summary
pub const VOLUME_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Serialize)]
pub struct DayView {
  #[serde(flatten)]
  pub day: ScheduledDay,
  pub progress: DayProgress,
  /// Every prescribed set of the day is done
  pub complete: bool,
}

#[derive(Debug, Serialize)]
pub struct WorkoutPage {
  pub week: u32,
  pub date: NaiveDate,
  pub phase: Phase,
  pub days: Vec<DayView>,
  pub entries: Vec<WorkoutEntry>,
  pub readiness: Option<ReadinessEntry>,
  /// No check-in yet today; the UI asks before showing the workout
  pub needs_readiness: bool,
}

/// Load swaps, today's entries and today's readiness concurrently, then
/// assemble the page. `None` when the week is outside the program.
pub async fn load_workout_page(
  state: &AppState,
  user_id: &str,
  week: u32,
  date: NaiveDate,
) -> Result<Option<WorkoutPage>, String> {
  let (swaps, entries, readiness) = tokio::join!(
    load_swaps(&state.db, user_id),
    load_entries(&state.db, user_id, week, date),
    load_readiness(&state.db, user_id, date),
  );
  let swaps = swaps.map_err(|e| format!("Failed to load swaps: {}", e))?;
  let entries = entries.map_err(|e| format!("Failed to load entries: {}", e))?;
  let readiness = readiness.map_err(|e| format!("Failed to load readiness: {}", e))?;

  let swaps = SwapTable::from_rows(swaps);
  let Some(schedule) = week_schedule(week, user_id, &swaps) else {
    return Ok(None);
  };

  let index = EntryIndex::from_entries(entries);
  let days = schedule
    .days
    .into_iter()
    .map(|day| {
      let progress = day.progress(&index);
      DayView {
        complete: progress.is_complete(),
        progress,
        day,
      }
    })
    .collect();

  Ok(Some(WorkoutPage {
    week,
    date,
    phase: schedule.phase,
    days,
    entries: index.into_entries(),
    needs_readiness: readiness.is_none(),
    readiness,
  }))
}

async fn schedule_for(state: &AppState, user_id: &str, week: u32) -> Result<WeekSchedule, String> {
  let swaps = super::current_swaps(state, user_id).await?;
  week_schedule(week, user_id, &swaps).ok_or_else(|| format!("Week {} is outside the program", week))
}

/// Locate a prescribed set in a resolved schedule
fn locate_set<'a>(
  schedule: &'a WeekSchedule,
  user_id: &'a str,
  day_number: u8,
  exercise_id: &str,
  set_number: u32,
  date: NaiveDate,
) -> Result<SetRef<'a>, String> {
  let day = schedule
    .day(day_number)
    .ok_or_else(|| format!("Day {} is not in the program", day_number))?;
  let exercise = day
    .exercise(exercise_id)
    .ok_or_else(|| format!("{} is not scheduled on day {}", exercise_id, day_number))?;
  if !exercise.has_set(set_number) {
    return Err(format!(
      "{} has {} sets in week {}, not {}",
      exercise.exercise.name, exercise.sets, schedule.week, set_number
    ));
  }

  Ok(SetRef {
    user_id,
    exercise,
    day_name: day.name,
    week: schedule.week,
    set_number,
    date,
  })
}

pub async fn toggle_set(
  state: &AppState,
  user_id: &str,
  week: u32,
  day_number: u8,
  exercise_id: &str,
  set_number: u32,
  date: NaiveDate,
) -> Result<WorkoutEntry, String> {
  let schedule = schedule_for(state, user_id, week).await?;
  let set = locate_set(&schedule, user_id, day_number, exercise_id, set_number, date)?;
  workout_log::toggle_set(&state.db, &set)
    .await
    .map_err(|e| format!("Failed to save set: {}", e))
}

#[allow(clippy::too_many_arguments)]
pub async fn update_set(
  state: &AppState,
  user_id: &str,
  week: u32,
  day_number: u8,
  exercise_id: &str,
  set_number: u32,
  date: NaiveDate,
  edit: EntryEdit,
) -> Result<WorkoutEntry, String> {
  let schedule = schedule_for(state, user_id, week).await?;
  let set = locate_set(&schedule, user_id, day_number, exercise_id, set_number, date)?;
  workout_log::update_entry(&state.db, &set, edit)
    .await
    .map_err(|e| format!("Failed to save set: {}", e))
}

/// Every set logged against a catalog exercise
pub async fn get_load_history(
  state: &AppState,
  user_id: &str,
  exercise_id: &str,
) -> Result<Vec<WorkoutEntry>, String> {
  load_history(&state.db, user_id, exercise_id)
    .await
    .map_err(|e| format!("Failed to load history: {}", e))
}

/// Top completed weight per program week for one catalog exercise
pub async fn get_progress_by_week(
  state: &AppState,
  user_id: &str,
  exercise_id: &str,
) -> Result<Vec<WeekProgress>, String> {
  program()
    .get(exercise_id)
    .ok_or_else(|| format!("Exercise not found: {}", exercise_id))?;

  progress_by_week(&state.db, user_id, exercise_id)
    .await
    .map_err(|e| format!("Failed to load progress: {}", e))
}

/// Completed sets and volume per calendar week over the last `days` days
pub async fn get_weekly_volume(
  state: &AppState,
  user_id: &str,
  today: NaiveDate,
  days: u32,
) -> Result<Vec<WeeklyVolume>, String> {
  let since = today - Duration::days(i64::from(days));
  weekly_volume(&state.db, user_id, since)
    .await
    .map_err(|e| format!("Failed to load volume: {}", e))
}
