use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged set.
///
/// `original_exercise_id` is the catalog identity the set was prescribed
/// under; `exercise_name` is what was actually performed (the substitute's
/// name while a swap is active). Changing a swap later does not orphan
/// history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkoutEntry {
  pub id: i64,
  pub user_id: String,
  pub original_exercise_id: String,
  pub exercise_name: String,
  pub day_name: String,
  pub week_number: i64,
  pub set_number: i64,
  pub weight: f64,
  pub reps: i64,
  pub completed: bool,
  pub date: NaiveDate,
}
