//! Body-weight page: log today's weight, chart a range, delete entries

use chrono::NaiveDate;
use tracing::info;

use crate::body_weight::{
  load_body_weights, save_body_weight, summarize, BodyWeightRange, BodyWeightSummary, WeighIn,
};
use crate::db::AppState;
use crate::models::BodyWeightEntry;

pub async fn log_body_weight(
  state: &AppState,
  user_id: &str,
  date: NaiveDate,
  weight_lbs: f64,
  body_fat_pct: Option<f64>,
  notes: Option<String>,
) -> Result<BodyWeightEntry, String> {
  let weigh_in = WeighIn::new(weight_lbs, body_fat_pct, notes).map_err(|e| e.to_string())?;
  save_body_weight(&state.db, user_id, date, &weigh_in)
    .await
    .map_err(|e| format!("Failed to save body weight: {}", e))
}

pub async fn get_body_weight(
  state: &AppState,
  user_id: &str,
  range: BodyWeightRange,
  today: NaiveDate,
) -> Result<BodyWeightSummary, String> {
  let entries = load_body_weights(&state.db, user_id)
    .await
    .map_err(|e| format!("Failed to load body weight: {}", e))?;
  Ok(summarize(entries, range, today))
}

pub async fn delete_body_weight(state: &AppState, user_id: &str, id: i64) -> Result<(), String> {
  let removed = crate::body_weight::delete_body_weight(&state.db, user_id, id)
    .await
    .map_err(|e| format!("Failed to delete body weight: {}", e))?;

  if !removed {
    return Err(format!("Body-weight entry {} not found", id));
  }
  info!(user = user_id, id, "Body weight entry deleted");
  Ok(())
}
