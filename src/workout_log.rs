//! Set logging
//!
//! Entries are keyed by (user, original exercise, week, set, date). The name
//! of the exercise actually performed is stored alongside, so swapping an
//! exercise later keeps its history attached to the catalog identity.
//!
//! Both write paths are single upserts: two rapid taps on the same set can
//! not produce duplicate rows. Every write refreshes `exercise_name`, so a
//! set re-logged after a swap change names what was performed last.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::db::StoreError;
use crate::models::WorkoutEntry;
use crate::periodization::PROGRAM_WEEKS;
use crate::schedule::ScheduledExercise;

/// Identifies one prescribed set within a user's training day
#[derive(Debug, Clone, Copy)]
pub struct SetRef<'a> {
    pub user_id: &'a str,
    pub exercise: &'a ScheduledExercise,
    pub day_name: &'a str,
    pub week: u32,
    pub set_number: u32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryEdit {
    Weight(f64),
    Reps(i64),
}

/// Parse a user-typed number; anything unparseable is stored as 0
pub fn parse_entry_value(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

impl EntryEdit {
    pub fn weight(raw: &str) -> Self {
        Self::Weight(parse_entry_value(raw))
    }

    pub fn reps(raw: &str) -> Self {
        Self::Reps(parse_entry_value(raw).round() as i64)
    }
}

// ---------------------------------------------------------------------------
/// Entry Index: today's entries by (original exercise, set number)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct EntryIndex {
    entries: HashMap<(String, i64), WorkoutEntry>,
}

impl EntryIndex {
    pub fn from_entries(entries: impl IntoIterator<Item = WorkoutEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| ((e.original_exercise_id.clone(), e.set_number), e))
            .collect();
        Self { entries }
    }

    pub fn get(&self, original_exercise_id: &str, set_number: u32) -> Option<&WorkoutEntry> {
        self.entries
            .get(&(original_exercise_id.to_string(), i64::from(set_number)))
    }

    pub fn is_completed(&self, original_exercise_id: &str, set_number: u32) -> bool {
        self.get(original_exercise_id, set_number)
            .is_some_and(|e| e.completed)
    }

    /// Completed sets among the exercise's prescribed sets
    pub fn completed_sets(&self, exercise: &ScheduledExercise) -> u32 {
        let id = exercise.exercise.original_id;
        (1..=exercise.sets)
            .filter(|set| self.is_completed(id, *set))
            .map(|_| 1)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<WorkoutEntry> {
        let mut entries: Vec<WorkoutEntry> = self.entries.into_values().collect();
        entries.sort_by(|a, b| {
            (&a.original_exercise_id, a.set_number).cmp(&(&b.original_exercise_id, b.set_number))
        });
        entries
    }
}

// ---------------------------------------------------------------------------
// Database Operations
// ---------------------------------------------------------------------------

const ENTRY_COLUMNS: &str = "id, user_id, original_exercise_id, exercise_name, day_name, \
     week_number, set_number, weight, reps, completed, date";

/// Entries a user logged for `week` on `date`
pub async fn load_entries(
    pool: &SqlitePool,
    user_id: &str,
    week: u32,
    date: NaiveDate,
) -> Result<Vec<WorkoutEntry>, StoreError> {
    let sql = format!(
        "SELECT {} FROM workout_entries WHERE user_id = ? AND week_number = ? AND date = ? \
         ORDER BY original_exercise_id, set_number",
        ENTRY_COLUMNS
    );
    let entries = sqlx::query_as::<_, WorkoutEntry>(&sql)
        .bind(user_id)
        .bind(i64::from(week))
        .bind(date)
        .fetch_all(pool)
        .await?;

    Ok(entries)
}

/// Every entry logged against a catalog exercise, whichever substitute was
/// performed at the time
pub async fn load_history(
    pool: &SqlitePool,
    user_id: &str,
    original_exercise_id: &str,
) -> Result<Vec<WorkoutEntry>, StoreError> {
    let sql = format!(
        "SELECT {} FROM workout_entries WHERE user_id = ? AND original_exercise_id = ? \
         ORDER BY date, week_number, set_number",
        ENTRY_COLUMNS
    );
    let entries = sqlx::query_as::<_, WorkoutEntry>(&sql)
        .bind(user_id)
        .bind(original_exercise_id)
        .fetch_all(pool)
        .await?;

    Ok(entries)
}

async fn load_entry(pool: &SqlitePool, set: &SetRef<'_>) -> Result<WorkoutEntry, StoreError> {
    let sql = format!(
        "SELECT {} FROM workout_entries WHERE user_id = ? AND original_exercise_id = ? \
         AND week_number = ? AND set_number = ? AND date = ?",
        ENTRY_COLUMNS
    );
    let entry = sqlx::query_as::<_, WorkoutEntry>(&sql)
        .bind(set.user_id)
        .bind(set.exercise.exercise.original_id)
        .bind(i64::from(set.week))
        .bind(i64::from(set.set_number))
        .bind(set.date)
        .fetch_one(pool)
        .await?;

    Ok(entry)
}

/// Tap-to-complete: flip `completed` on an existing entry, otherwise log the
/// set at its prescription as completed
pub async fn toggle_set(pool: &SqlitePool, set: &SetRef<'_>) -> Result<WorkoutEntry, StoreError> {
    let exercise = set.exercise;

    sqlx::query(
        r#"
        INSERT INTO workout_entries
            (user_id, original_exercise_id, exercise_name, day_name,
             week_number, set_number, weight, reps, completed, date)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, 1, ?)
        ON CONFLICT(user_id, original_exercise_id, week_number, set_number, date)
        DO UPDATE SET
            completed = NOT workout_entries.completed,
            exercise_name = excluded.exercise_name,
            day_name = excluded.day_name
        "#,
    )
    .bind(set.user_id)
    .bind(exercise.exercise.original_id)
    .bind(&exercise.exercise.name)
    .bind(set.day_name)
    .bind(i64::from(set.week))
    .bind(i64::from(set.set_number))
    .bind(exercise.weight.logged_weight())
    .bind(i64::from(exercise.exercise.progression.target_reps))
    .bind(set.date)
    .execute(pool)
    .await?;

    let entry = load_entry(pool, set).await?;
    debug!(
        user = set.user_id,
        exercise = exercise.exercise.original_id,
        set = set.set_number,
        completed = entry.completed,
        "Toggled set"
    );
    Ok(entry)
}

/// Edit weight or reps of a set. A missing entry is created with the edited
/// value and the prescription for the other field, not yet completed.
pub async fn update_entry(
    pool: &SqlitePool,
    set: &SetRef<'_>,
    edit: EntryEdit,
) -> Result<WorkoutEntry, StoreError> {
    let exercise = set.exercise;
    let prescribed_weight = exercise.weight.logged_weight();
    let prescribed_reps = i64::from(exercise.exercise.progression.target_reps);

    let (weight, reps, update_clause) = match edit {
        EntryEdit::Weight(w) => (w, prescribed_reps, "weight = excluded.weight"),
        EntryEdit::Reps(r) => (prescribed_weight, r, "reps = excluded.reps"),
    };

    let sql = format!(
        r#"
        INSERT INTO workout_entries
            (user_id, original_exercise_id, exercise_name, day_name,
             week_number, set_number, weight, reps, completed, date)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0, ?)
        ON CONFLICT(user_id, original_exercise_id, week_number, set_number, date)
        DO UPDATE SET
            {},
            exercise_name = excluded.exercise_name,
            day_name = excluded.day_name
        "#,
        update_clause
    );

    sqlx::query(&sql)
        .bind(set.user_id)
        .bind(exercise.exercise.original_id)
        .bind(&exercise.exercise.name)
        .bind(set.day_name)
        .bind(i64::from(set.week))
        .bind(i64::from(set.set_number))
        .bind(weight)
        .bind(reps)
        .bind(set.date)
        .execute(pool)
        .await?;

    debug!(
        user = set.user_id,
        exercise = exercise.exercise.original_id,
        set = set.set_number,
        ?edit,
        "Updated set"
    );
    load_entry(pool, set).await
}

// ---------------------------------------------------------------------------
/// Trends: per-week top weight and weekly training volume
// ---------------------------------------------------------------------------

/// Heaviest completed set of an exercise in one program week
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekProgress {
    pub week: u32,
    /// `None` when nothing was completed that week
    pub top_weight: Option<f64>,
}

/// Completed work in one Monday-to-Sunday calendar week
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyVolume {
    pub week_start: NaiveDate,
    pub sets: u32,
    /// Sum of weight x reps
    pub volume: f64,
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Bucket completed entries by calendar week, oldest week first
pub fn summarize_volume(entries: &[WorkoutEntry]) -> Vec<WeeklyVolume> {
    let mut by_week: BTreeMap<NaiveDate, WeeklyVolume> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.completed) {
        let start = week_start(entry.date);
        let bucket = by_week.entry(start).or_insert(WeeklyVolume {
            week_start: start,
            sets: 0,
            volume: 0.0,
        });
        bucket.sets += 1;
        bucket.volume += entry.weight * entry.reps as f64;
    }
    by_week.into_values().collect()
}

/// Top completed weight for weeks 1-8 of a catalog exercise. Keyed on the
/// original identity, so the line stays continuous across swaps.
pub async fn progress_by_week(
    pool: &SqlitePool,
    user_id: &str,
    original_exercise_id: &str,
) -> Result<Vec<WeekProgress>, StoreError> {
    let rows: Vec<(i64, f64)> = sqlx::query_as(
        r#"
        SELECT week_number, MAX(weight)
        FROM workout_entries
        WHERE user_id = ? AND original_exercise_id = ? AND completed = 1
        GROUP BY week_number
        "#,
    )
    .bind(user_id)
    .bind(original_exercise_id)
    .fetch_all(pool)
    .await?;

    let top: HashMap<i64, f64> = rows.into_iter().collect();
    Ok((1..=PROGRAM_WEEKS)
        .map(|week| WeekProgress {
            week,
            top_weight: top.get(&i64::from(week)).copied(),
        })
        .collect())
}

/// Weekly completed sets and volume for entries dated `since` or later
pub async fn weekly_volume(
    pool: &SqlitePool,
    user_id: &str,
    since: NaiveDate,
) -> Result<Vec<WeeklyVolume>, StoreError> {
    let sql = format!(
        "SELECT {} FROM workout_entries WHERE user_id = ? AND date >= ? AND completed = 1 \
         ORDER BY date",
        ENTRY_COLUMNS
    );
    let entries = sqlx::query_as::<_, WorkoutEntry>(&sql)
        .bind(user_id)
        .bind(since)
        .fetch_all(pool)
        .await?;

    Ok(summarize_volume(&entries))
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{week_schedule, WeekSchedule};
    use crate::substitution::SwapTable;
    use crate::test_utils::{make_entry, make_swap, setup_test_db, teardown_test_db, test_date};

    fn schedule(week: u32, swaps: &SwapTable) -> WeekSchedule {
        week_schedule(week, "sam", swaps).expect("valid week")
    }

    fn set_ref<'a>(schedule: &'a WeekSchedule, day: u8, exercise_id: &str, set_number: u32) -> SetRef<'a> {
        let day = schedule.day(day).expect("day exists");
        SetRef {
            user_id: "sam",
            exercise: day.exercise(exercise_id).expect("exercise on day"),
            day_name: day.name,
            week: schedule.week,
            set_number,
            date: test_date(),
        }
    }

    #[test]
    fn test_parse_entry_value() {
        assert_eq!(parse_entry_value("82.5"), 82.5);
        assert_eq!(parse_entry_value(" 10 "), 10.0);
        assert_eq!(parse_entry_value(""), 0.0);
        assert_eq!(parse_entry_value("heavy"), 0.0);
        assert_eq!(parse_entry_value("NaN"), 0.0);
        assert_eq!(EntryEdit::reps("8.6"), EntryEdit::Reps(9));
    }

    #[test]
    fn test_entry_index_lookup() {
        let index = EntryIndex::from_entries(vec![
            make_entry("flat-db-bench", 1, true),
            make_entry("flat-db-bench", 2, false),
        ]);
        assert_eq!(index.len(), 2);
        assert!(index.is_completed("flat-db-bench", 1));
        assert!(!index.is_completed("flat-db-bench", 2));
        assert!(!index.is_completed("flat-db-bench", 3));
        assert!(index.get("t-bar-row", 1).is_none());
    }

    #[tokio::test]
    async fn test_toggle_creates_completed_entry_at_prescription() {
        let pool = setup_test_db().await;
        let week = schedule(6, &SwapTable::new());

        let entry = toggle_set(&pool, &set_ref(&week, 1, "flat-db-bench", 1))
            .await
            .expect("Should insert");

        assert!(entry.completed);
        assert_eq!(entry.weight, 85.0);
        assert_eq!(entry.reps, 10);
        assert_eq!(entry.exercise_name, "Flat DB Bench");
        assert_eq!(entry.day_name, "Chest & Back (Horizontal)");
        assert_eq!(entry.week_number, 6);

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_toggle_twice_flips_completed() {
        let pool = setup_test_db().await;
        let week = schedule(1, &SwapTable::new());
        let set = set_ref(&week, 1, "t-bar-row", 2);

        toggle_set(&pool, &set).await.expect("first toggle");
        let second = toggle_set(&pool, &set).await.expect("second toggle");
        assert!(!second.completed);

        let third = toggle_set(&pool, &set).await.expect("third toggle");
        assert!(third.completed);

        let entries = load_entries(&pool, "sam", 1, test_date()).await.expect("Should load");
        assert_eq!(entries.len(), 1);

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_bodyweight_set_logs_zero_weight() {
        let pool = setup_test_db().await;
        let week = schedule(2, &SwapTable::new());

        let entry = toggle_set(&pool, &set_ref(&week, 5, "nordic-ham-curl", 1))
            .await
            .expect("Should insert");
        assert_eq!(entry.weight, 0.0);
        assert_eq!(entry.reps, 10);

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_update_missing_entry_uses_prescription_for_other_field() {
        let pool = setup_test_db().await;
        let week = schedule(3, &SwapTable::new());
        let set = set_ref(&week, 1, "flat-db-bench", 1);

        let entry = update_entry(&pool, &set, EntryEdit::Reps(8)).await.expect("Should insert");
        assert_eq!(entry.reps, 8);
        assert_eq!(entry.weight, 80.0);
        assert!(!entry.completed);

        let entry = update_entry(&pool, &set, EntryEdit::weight("82.5"))
            .await
            .expect("Should update");
        assert_eq!(entry.weight, 82.5);
        assert_eq!(entry.reps, 8, "reps edit should survive a weight edit");

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_update_keeps_completed_flag() {
        let pool = setup_test_db().await;
        let week = schedule(1, &SwapTable::new());
        let set = set_ref(&week, 2, "leg-press", 1);

        toggle_set(&pool, &set).await.expect("toggle");
        let entry = update_entry(&pool, &set, EntryEdit::weight("370")).await.expect("update");
        assert!(entry.completed);
        assert_eq!(entry.weight, 370.0);

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_history_survives_swap_change() {
        let pool = setup_test_db().await;

        let mut swaps = SwapTable::new();
        swaps.set_swap(make_swap("sam", "flat-db-bench", "barbell-bench", "Barbell Bench Press"));
        let week_one = schedule(1, &swaps);
        toggle_set(&pool, &set_ref(&week_one, 1, "flat-db-bench", 1))
            .await
            .expect("log swapped set");

        swaps.clear_swap("sam", "flat-db-bench");
        let week_two = schedule(2, &swaps);
        toggle_set(&pool, &set_ref(&week_two, 1, "flat-db-bench", 1))
            .await
            .expect("log original set");

        let history = load_history(&pool, "sam", "flat-db-bench").await.expect("history");
        let names: Vec<&str> = history.iter().map(|e| e.exercise_name.as_str()).collect();
        assert_eq!(names, vec!["Barbell Bench Press", "Flat DB Bench"]);

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_relogging_after_swap_change_records_current_name() {
        let pool = setup_test_db().await;

        let mut swaps = SwapTable::new();
        swaps.set_swap(make_swap("sam", "flat-db-bench", "barbell-bench", "Barbell Bench Press"));
        let swapped = schedule(1, &swaps);
        let entry = toggle_set(&pool, &set_ref(&swapped, 1, "flat-db-bench", 1))
            .await
            .expect("log swapped set");
        assert_eq!(entry.exercise_name, "Barbell Bench Press");

        swaps.clear_swap("sam", "flat-db-bench");
        let original = schedule(1, &swaps);
        let entry = update_entry(&pool, &set_ref(&original, 1, "flat-db-bench", 1), EntryEdit::Weight(70.0))
            .await
            .expect("edit same set");
        assert_eq!(entry.exercise_name, "Flat DB Bench");
        assert_eq!(entry.weight, 70.0);
        assert!(entry.completed);

        swaps.set_swap(make_swap("sam", "flat-db-bench", "machine-chest-press", "Machine Chest Press"));
        let reswapped = schedule(1, &swaps);
        let entry = toggle_set(&pool, &set_ref(&reswapped, 1, "flat-db-bench", 1))
            .await
            .expect("toggle same set");
        assert_eq!(entry.exercise_name, "Machine Chest Press");
        assert!(!entry.completed);

        let entries = load_entries(&pool, "sam", 1, test_date()).await.expect("Should load");
        assert_eq!(entries.len(), 1);

        teardown_test_db(pool).await;
    }

    #[test]
    fn test_week_start_is_monday() {
        let monday = test_date();
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
        let next_monday = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        assert_eq!(week_start(monday), monday);
        assert_eq!(week_start(sunday), monday);
        assert_eq!(week_start(next_monday), next_monday);
    }

    #[test]
    fn test_summarize_volume_groups_completed_sets_by_week() {
        let mut sunday = make_entry("flat-db-bench", 2, true);
        sunday.date = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
        let mut next_week = make_entry("flat-db-bench", 3, true);
        next_week.date = NaiveDate::from_ymd_opt(2025, 3, 18).unwrap();
        next_week.weight = 50.0;
        next_week.reps = 8;

        let volume = summarize_volume(&[
            make_entry("flat-db-bench", 1, true),
            sunday,
            make_entry("t-bar-row", 1, false),
            next_week,
        ]);

        assert_eq!(
            volume,
            vec![
                WeeklyVolume { week_start: test_date(), sets: 2, volume: 2000.0 },
                WeeklyVolume {
                    week_start: NaiveDate::from_ymd_opt(2025, 3, 17).unwrap(),
                    sets: 1,
                    volume: 400.0,
                },
            ]
        );
        assert!(summarize_volume(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_progress_by_week_uses_top_completed_weight() {
        let pool = setup_test_db().await;

        let week_one = schedule(1, &SwapTable::new());
        toggle_set(&pool, &set_ref(&week_one, 1, "flat-db-bench", 1)).await.expect("toggle");
        // Heavier but never completed
        update_entry(&pool, &set_ref(&week_one, 1, "flat-db-bench", 2), EntryEdit::Weight(95.0))
            .await
            .expect("edit");

        let mut swaps = SwapTable::new();
        swaps.set_swap(make_swap("sam", "flat-db-bench", "barbell-bench", "Barbell Bench Press"));
        let week_three = schedule(3, &swaps);
        let set = set_ref(&week_three, 1, "flat-db-bench", 1);
        toggle_set(&pool, &set).await.expect("toggle");
        update_entry(&pool, &set, EntryEdit::Weight(82.5)).await.expect("edit");
        toggle_set(&pool, &set_ref(&week_three, 1, "flat-db-bench", 2)).await.expect("toggle");

        let progress = progress_by_week(&pool, "sam", "flat-db-bench").await.expect("progress");
        assert_eq!(progress.len(), 8);
        let tops: Vec<Option<f64>> = progress.iter().map(|p| p.top_weight).collect();
        assert_eq!(
            tops,
            vec![Some(75.0), None, Some(82.5), None, None, None, None, None]
        );
        assert_eq!(progress[2].week, 3);

        assert!(progress_by_week(&pool, "alex", "flat-db-bench")
            .await
            .unwrap()
            .iter()
            .all(|p| p.top_weight.is_none()));

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_weekly_volume_respects_since() {
        let pool = setup_test_db().await;
        let week = schedule(1, &SwapTable::new());

        let mut old = set_ref(&week, 1, "flat-db-bench", 1);
        old.date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        toggle_set(&pool, &old).await.expect("toggle");
        toggle_set(&pool, &set_ref(&week, 1, "flat-db-bench", 1)).await.expect("toggle");
        toggle_set(&pool, &set_ref(&week, 1, "flat-db-bench", 2)).await.expect("toggle");

        let since = NaiveDate::from_ymd_opt(2025, 2, 8).unwrap();
        let volume = weekly_volume(&pool, "sam", since).await.expect("volume");
        assert_eq!(volume.len(), 1);
        assert_eq!(volume[0].week_start, test_date());
        assert_eq!(volume[0].sets, 2);
        assert_eq!(volume[0].volume, 2.0 * 75.0 * 10.0);

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_load_entries_filters_by_week_and_user() {
        let pool = setup_test_db().await;
        let week = schedule(1, &SwapTable::new());
        toggle_set(&pool, &set_ref(&week, 1, "face-pull", 1)).await.expect("toggle");

        assert_eq!(load_entries(&pool, "sam", 1, test_date()).await.unwrap().len(), 1);
        assert!(load_entries(&pool, "sam", 2, test_date()).await.unwrap().is_empty());
        assert!(load_entries(&pool, "alex", 1, test_date()).await.unwrap().is_empty());

        teardown_test_db(pool).await;
    }
}
