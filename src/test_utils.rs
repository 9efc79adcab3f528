//! Test utilities and helpers for unit and database tests
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock data factories
//! - Seed helpers

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::{BodyWeightEntry, ExerciseSwap, WorkoutEntry};
use crate::substitution::save_swap;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Seed two swaps for `user_id`: bench -> barbell bench, leg press -> hack squat
pub async fn seed_test_swaps(pool: &SqlitePool, user_id: &str) -> Vec<ExerciseSwap> {
  let swaps = vec![
    make_swap(user_id, "flat-db-bench", "barbell-bench", "Barbell Bench Press"),
    make_swap(user_id, "leg-press", "hack-squat", "Hack Squat"),
  ];

  for swap in &swaps {
    save_swap(pool, swap).await.expect("Failed to seed swap");
  }

  swaps
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn make_swap(
  user_id: &str,
  original_exercise_id: &str,
  substitute_exercise_id: &str,
  substitute_name: &str,
) -> ExerciseSwap {
  ExerciseSwap {
    user_id: user_id.to_string(),
    original_exercise_id: original_exercise_id.to_string(),
    substitute_exercise_id: substitute_exercise_id.to_string(),
    substitute_name: substitute_name.to_string(),
  }
}

/// Week 1 entry for user "sam" on `test_date()`
pub fn make_entry(original_exercise_id: &str, set_number: i64, completed: bool) -> WorkoutEntry {
  WorkoutEntry {
    id: set_number,
    user_id: "sam".to_string(),
    original_exercise_id: original_exercise_id.to_string(),
    exercise_name: original_exercise_id.to_string(),
    day_name: "Test Day".to_string(),
    week_number: 1,
    set_number,
    weight: 100.0,
    reps: 10,
    completed,
    date: test_date(),
  }
}

pub fn make_body_weight(
  id: i64,
  date: NaiveDate,
  weight_lbs: f64,
  body_fat_pct: Option<f64>,
) -> BodyWeightEntry {
  BodyWeightEntry {
    id,
    user_id: "sam".to_string(),
    date,
    weight_lbs,
    body_fat_pct,
    notes: None,
  }
}

/// Fixed training date so tests never straddle midnight
pub fn test_date() -> NaiveDate {
  NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('exercise_swaps', 'workout_entries', 'readiness_entries', 'body_weight_entries')"
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 4, "Expected 4 tables, got {}", tables.len());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_swaps_returns_seeded_rows() {
    let pool = setup_test_db().await;

    let swaps = seed_test_swaps(&pool, "sam").await;
    assert_eq!(swaps.len(), 2);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercise_swaps WHERE user_id = 'sam'")
      .fetch_one(&pool)
      .await
      .expect("Failed to count swaps");

    assert_eq!(count, 2);

    teardown_test_db(pool).await;
  }
}
