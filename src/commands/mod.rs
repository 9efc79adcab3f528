//! Operations the presentation layer calls.
//!
//! Every command returns `Result<T, String>`: the error is a one-line message
//! the UI shows next to the failed action, and retrying means calling the
//! same command again.

pub mod body_weight;
pub mod program;
pub mod readiness;
pub mod swaps;
pub mod workouts;

use crate::db::AppState;
use crate::substitution::{load_swaps, SwapTable};

/// Fresh swap table for `user_id`, read straight from storage
pub(crate) async fn current_swaps(state: &AppState, user_id: &str) -> Result<SwapTable, String> {
  let rows = load_swaps(&state.db, user_id)
    .await
    .map_err(|e| format!("Failed to load swaps: {}", e))?;
  Ok(SwapTable::from_rows(rows))
}
