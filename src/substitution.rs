//! Substitution Layer
//!
//! Per-user overrides that replace a catalog exercise with one of its own
//! listed substitutes. A swapped exercise takes the substitute's display data
//! but keeps the original's progression numbers; progression is always keyed
//! by the original identity.
//!
//! Swaps are validated against the catalog when written. When read back they
//! are resolved leniently: a substitute id that has since left the catalog
//! falls back to the stored display name instead of failing.

use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::catalog::{Catalog, ExerciseDefinition, ProgressionParams, SubstituteDefinition};
use crate::db::StoreError;
use crate::models::ExerciseSwap;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SwapError {
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    #[error("{substitute} is not a substitute for {original}")]
    NotASubstitute { original: String, substitute: String },
}

// ---------------------------------------------------------------------------
/// Swap Table: active swaps keyed by (user, original exercise)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapKey {
    pub user_id: String,
    pub original_exercise_id: String,
}

impl SwapKey {
    pub fn new(user_id: &str, original_exercise_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            original_exercise_id: original_exercise_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SwapTable {
    swaps: HashMap<SwapKey, ExerciseSwap>,
}

impl SwapTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored rows; a later row for the same key wins
    pub fn from_rows(rows: impl IntoIterator<Item = ExerciseSwap>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.set_swap(row);
        }
        table
    }

    /// Upsert; returns the swap it replaced, if any
    pub fn set_swap(&mut self, swap: ExerciseSwap) -> Option<ExerciseSwap> {
        let key = SwapKey::new(&swap.user_id, &swap.original_exercise_id);
        self.swaps.insert(key, swap)
    }

    /// Remove the override so the original exercise applies again
    pub fn clear_swap(&mut self, user_id: &str, original_exercise_id: &str) -> Option<ExerciseSwap> {
        self.swaps.remove(&SwapKey::new(user_id, original_exercise_id))
    }

    pub fn get(&self, user_id: &str, original_exercise_id: &str) -> Option<&ExerciseSwap> {
        self.swaps.get(&SwapKey::new(user_id, original_exercise_id))
    }

    pub fn is_swapped(&self, user_id: &str, original_exercise_id: &str) -> bool {
        self.get(user_id, original_exercise_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }

    /// Resolve a catalog exercise against this user's active swap
    pub fn resolve(&self, user_id: &str, exercise: &ExerciseDefinition) -> ResolvedExercise {
        resolve(exercise, self.get(user_id, exercise.id))
    }
}

// ---------------------------------------------------------------------------
/// Resolved Exercise: display-ready result of applying a swap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Substitution {
    /// Prescribed exercise, no swap active
    Original,
    Swapped {
        substitute_id: String,
        /// Substitute id no longer listed for the original; display data is
        /// best-effort
        drifted: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedExercise {
    /// Catalog identity of the prescribed exercise, swapped or not
    pub original_id: &'static str,
    pub name: String,
    pub muscle: String,
    pub equipment: String,
    pub description: String,
    #[serde(flatten)]
    pub progression: ProgressionParams,
    pub substitution: Substitution,
}

impl ResolvedExercise {
    pub fn is_swapped(&self) -> bool {
        matches!(self.substitution, Substitution::Swapped { .. })
    }
}

/// Apply `swap` (if any) to a catalog exercise.
///
/// The substitute is looked up only among the original's own substitutes.
pub fn resolve(exercise: &ExerciseDefinition, swap: Option<&ExerciseSwap>) -> ResolvedExercise {
    let Some(swap) = swap else {
        return ResolvedExercise {
            original_id: exercise.id,
            name: exercise.name.to_string(),
            muscle: exercise.muscle.to_string(),
            equipment: exercise.equipment.to_string(),
            description: String::new(),
            progression: exercise.progression,
            substitution: Substitution::Original,
        };
    };

    match exercise.substitute(&swap.substitute_exercise_id) {
        Some(sub) => ResolvedExercise {
            original_id: exercise.id,
            name: sub.name.to_string(),
            muscle: sub.muscle.to_string(),
            equipment: sub.equipment.to_string(),
            description: sub.description.to_string(),
            progression: exercise.progression,
            substitution: Substitution::Swapped {
                substitute_id: sub.id.to_string(),
                drifted: false,
            },
        },
        None => {
            warn!(
                original = exercise.id,
                substitute = %swap.substitute_exercise_id,
                "Swap points at an unlisted substitute, using stored name"
            );
            let name = if swap.substitute_name.trim().is_empty() {
                swap.substitute_exercise_id.clone()
            } else {
                swap.substitute_name.clone()
            };
            ResolvedExercise {
                original_id: exercise.id,
                name,
                muscle: exercise.muscle.to_string(),
                equipment: exercise.equipment.to_string(),
                description: String::new(),
                progression: exercise.progression,
                substitution: Substitution::Swapped {
                    substitute_id: swap.substitute_exercise_id.clone(),
                    drifted: true,
                },
            }
        }
    }
}

/// Check that `substitute_id` is one of the listed substitutes for
/// `original_id` before a swap is written
pub fn validate_swap<'c>(
    catalog: &'c Catalog,
    original_id: &str,
    substitute_id: &str,
) -> Result<(&'c ExerciseDefinition, &'c SubstituteDefinition), SwapError> {
    let exercise = catalog
        .get(original_id)
        .ok_or_else(|| SwapError::UnknownExercise(original_id.to_string()))?;
    let substitute = exercise
        .substitute(substitute_id)
        .ok_or_else(|| SwapError::NotASubstitute {
            original: original_id.to_string(),
            substitute: substitute_id.to_string(),
        })?;
    Ok((exercise, substitute))
}

// ---------------------------------------------------------------------------
/// Swap Options: what the swap dialog shows for one exercise
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapOptions {
    pub exercise_id: &'static str,
    pub exercise_name: &'static str,
    pub muscle: &'static str,
    pub substitutes: Vec<SubstituteDefinition>,
    pub active_substitute_id: Option<String>,
    /// Reset is only offered while a swap is active
    pub can_reset: bool,
}

pub fn swap_options(exercise: &ExerciseDefinition, active: Option<&ExerciseSwap>) -> SwapOptions {
    SwapOptions {
        exercise_id: exercise.id,
        exercise_name: exercise.name,
        muscle: exercise.muscle,
        substitutes: exercise.substitutes.clone(),
        active_substitute_id: active.map(|s| s.substitute_exercise_id.clone()),
        can_reset: active.is_some(),
    }
}

// ---------------------------------------------------------------------------
// Database Operations
// ---------------------------------------------------------------------------

/// Load every active swap for a user
pub async fn load_swaps(pool: &SqlitePool, user_id: &str) -> Result<Vec<ExerciseSwap>, StoreError> {
    let swaps = sqlx::query_as::<_, ExerciseSwap>(
        r#"
        SELECT user_id, original_exercise_id, substitute_exercise_id, substitute_name
        FROM exercise_swaps
        WHERE user_id = ?
        ORDER BY original_exercise_id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(swaps)
}

/// Upsert keyed by (user, original exercise); last write wins
pub async fn save_swap(pool: &SqlitePool, swap: &ExerciseSwap) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        INSERT INTO exercise_swaps
            (user_id, original_exercise_id, substitute_exercise_id, substitute_name, updated_at)
        VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(user_id, original_exercise_id) DO UPDATE SET
            substitute_exercise_id = excluded.substitute_exercise_id,
            substitute_name = excluded.substitute_name,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(&swap.user_id)
    .bind(&swap.original_exercise_id)
    .bind(&swap.substitute_exercise_id)
    .bind(&swap.substitute_name)
    .execute(pool)
    .await?;

    debug!(
        user = %swap.user_id,
        original = %swap.original_exercise_id,
        substitute = %swap.substitute_exercise_id,
        "Saved exercise swap"
    );

    Ok(())
}

/// Delete a swap; returns whether a row was removed
pub async fn delete_swap(
    pool: &SqlitePool,
    user_id: &str,
    original_exercise_id: &str,
) -> Result<bool, StoreError> {
    let result = sqlx::query(
        "DELETE FROM exercise_swaps WHERE user_id = ? AND original_exercise_id = ?",
    )
    .bind(user_id)
    .bind(original_exercise_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
