//! Swap dialog: list substitutes, swap, reset to default

use tracing::info;

use crate::catalog::program;
use crate::commands::current_swaps;
use crate::db::AppState;
use crate::models::ExerciseSwap;
use crate::substitution::{
  delete_swap, resolve, save_swap, swap_options, validate_swap, ResolvedExercise, SwapOptions,
};

pub async fn get_swap_options(
  state: &AppState,
  user_id: &str,
  exercise_id: &str,
) -> Result<SwapOptions, String> {
  let exercise = program()
    .get(exercise_id)
    .ok_or_else(|| format!("Exercise not found: {}", exercise_id))?;
  let swaps = current_swaps(state, user_id).await?;
  Ok(swap_options(exercise, swaps.get(user_id, exercise_id)))
}

/// Replace `original_id` with one of its substitutes for this user
pub async fn swap_exercise(
  state: &AppState,
  user_id: &str,
  original_id: &str,
  substitute_id: &str,
) -> Result<ResolvedExercise, String> {
  let (exercise, substitute) =
    validate_swap(program(), original_id, substitute_id).map_err(|e| e.to_string())?;

  let swap = ExerciseSwap {
    user_id: user_id.to_string(),
    original_exercise_id: exercise.id.to_string(),
    substitute_exercise_id: substitute.id.to_string(),
    substitute_name: substitute.name.to_string(),
  };

  save_swap(&state.db, &swap)
    .await
    .map_err(|e| format!("Failed to save swap: {}", e))?;

  info!(user = user_id, original = exercise.id, substitute = substitute.id, "Exercise swapped");
  Ok(resolve(exercise, Some(&swap)))
}

/// Drop the override so the prescribed exercise applies again
pub async fn reset_swap(
  state: &AppState,
  user_id: &str,
  original_id: &str,
) -> Result<ResolvedExercise, String> {
  let exercise = program()
    .get(original_id)
    .ok_or_else(|| format!("Exercise not found: {}", original_id))?;

  let removed = delete_swap(&state.db, user_id, original_id)
    .await
    .map_err(|e| format!("Failed to reset swap: {}", e))?;

  if removed {
    info!(user = user_id, original = original_id, "Swap reset to default");
  }
  Ok(resolve(exercise, None))
}
