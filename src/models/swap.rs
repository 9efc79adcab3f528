use serde::{Deserialize, Serialize};

/// A user's standing replacement of a catalog exercise.
/// Keyed by (user_id, original_exercise_id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ExerciseSwap {
  pub user_id: String,
  pub original_exercise_id: String,
  pub substitute_exercise_id: String,
  /// Display name captured at swap time; used when the substitute id
  /// no longer resolves against the catalog
  pub substitute_name: String,
}
