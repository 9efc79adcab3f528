//! Body-weight log
//!
//! One weigh-in per user per day; logging again on the same day replaces it.
//! Entries go away only through an explicit delete.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

use crate::db::StoreError;
use crate::models::BodyWeightEntry;

const MAX_BODY_FAT_PCT: f64 = 100.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BodyWeightError {
    #[error("weight must be a positive number, got {0}")]
    InvalidWeight(f64),

    #[error("body fat must be between 0 and 100%, got {0}")]
    InvalidBodyFat(f64),

    #[error("unknown range '{0}', expected 7d, 30d, 90d or all")]
    UnknownRange(String),
}

/// A validated weigh-in, ready to store
#[derive(Debug, Clone, PartialEq)]
pub struct WeighIn {
    pub weight_lbs: f64,
    pub body_fat_pct: Option<f64>,
    pub notes: Option<String>,
}

impl WeighIn {
    pub fn new(
        weight_lbs: f64,
        body_fat_pct: Option<f64>,
        notes: Option<String>,
    ) -> Result<Self, BodyWeightError> {
        if !weight_lbs.is_finite() || weight_lbs <= 0.0 {
            return Err(BodyWeightError::InvalidWeight(weight_lbs));
        }
        if let Some(pct) = body_fat_pct {
            if !pct.is_finite() || !(0.0..=MAX_BODY_FAT_PCT).contains(&pct) {
                return Err(BodyWeightError::InvalidBodyFat(pct));
            }
        }
        let notes = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self {
            weight_lbs,
            body_fat_pct,
            notes,
        })
    }
}

// ---------------------------------------------------------------------------
/// Range filter for the weight chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyWeightRange {
    Week,
    #[default]
    Month,
    Quarter,
    All,
}

impl BodyWeightRange {
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::Quarter => Some(90),
            Self::All => None,
        }
    }

    /// Earliest date inside the range, `None` for everything
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.days().map(|days| today - Duration::days(days))
    }

    pub fn contains(&self, today: NaiveDate, date: NaiveDate) -> bool {
        match self.cutoff(today) {
            Some(cutoff) => date >= cutoff,
            None => true,
        }
    }
}

impl FromStr for BodyWeightRange {
    type Err = BodyWeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7d" => Ok(Self::Week),
            "30d" => Ok(Self::Month),
            "90d" => Ok(Self::Quarter),
            "all" => Ok(Self::All),
            other => Err(BodyWeightError::UnknownRange(other.to_string())),
        }
    }
}

impl std::fmt::Display for BodyWeightRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Week => write!(f, "7d"),
            Self::Month => write!(f, "30d"),
            Self::Quarter => write!(f, "90d"),
            Self::All => write!(f, "all"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyWeightSummary {
    pub range: BodyWeightRange,
    /// Entries inside the range, newest first
    pub entries: Vec<BodyWeightEntry>,
    /// Most recent weigh-in regardless of range
    pub current: Option<BodyWeightEntry>,
    /// Current weight minus the oldest weight in range; needs two entries
    pub delta: Option<f64>,
    pub latest_body_fat: Option<f64>,
    pub logged_today: bool,
}

/// Summarize a user's weigh-ins, given newest first
pub fn summarize(
    entries: Vec<BodyWeightEntry>,
    range: BodyWeightRange,
    today: NaiveDate,
) -> BodyWeightSummary {
    let current = entries.first().cloned();
    let latest_body_fat = entries.iter().find_map(|e| e.body_fat_pct);
    let logged_today = current.as_ref().is_some_and(|e| e.date == today);

    let in_range: Vec<BodyWeightEntry> = entries
        .into_iter()
        .filter(|e| range.contains(today, e.date))
        .collect();

    let delta = match (&current, in_range.last()) {
        (Some(current), Some(oldest)) if in_range.len() > 1 => {
            Some(((current.weight_lbs - oldest.weight_lbs) * 10.0).round() / 10.0)
        }
        _ => None,
    };

    BodyWeightSummary {
        range,
        entries: in_range,
        current,
        delta,
        latest_body_fat,
        logged_today,
    }
}

// ---------------------------------------------------------------------------
// Database Operations
// ---------------------------------------------------------------------------

/// Every weigh-in for a user, newest first
pub async fn load_body_weights(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<BodyWeightEntry>, StoreError> {
    let entries = sqlx::query_as::<_, BodyWeightEntry>(
        r#"
        SELECT id, user_id, date, weight_lbs, body_fat_pct, notes
        FROM body_weight_entries
        WHERE user_id = ?
        ORDER BY date DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Record the day's weigh-in; a second one on the same day replaces it
pub async fn save_body_weight(
    pool: &SqlitePool,
    user_id: &str,
    date: NaiveDate,
    weigh_in: &WeighIn,
) -> Result<BodyWeightEntry, StoreError> {
    sqlx::query(
        r#"
        INSERT INTO body_weight_entries (user_id, date, weight_lbs, body_fat_pct, notes)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(user_id, date) DO UPDATE SET
            weight_lbs = excluded.weight_lbs,
            body_fat_pct = excluded.body_fat_pct,
            notes = excluded.notes
        "#,
    )
    .bind(user_id)
    .bind(date)
    .bind(weigh_in.weight_lbs)
    .bind(weigh_in.body_fat_pct)
    .bind(weigh_in.notes.as_deref())
    .execute(pool)
    .await?;

    let entry = sqlx::query_as::<_, BodyWeightEntry>(
        r#"
        SELECT id, user_id, date, weight_lbs, body_fat_pct, notes
        FROM body_weight_entries
        WHERE user_id = ? AND date = ?
        "#,
    )
    .bind(user_id)
    .bind(date)
    .fetch_one(pool)
    .await?;

    info!(user = user_id, %date, weight = entry.weight_lbs, "Body weight logged");
    Ok(entry)
}

/// Delete one of the user's weigh-ins; returns whether a row was removed
pub async fn delete_body_weight(
    pool: &SqlitePool,
    user_id: &str,
    id: i64,
) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM body_weight_entries WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_body_weight, setup_test_db, teardown_test_db, test_date};

    fn days_ago(days: i64) -> NaiveDate {
        test_date() - Duration::days(days)
    }

    #[test]
    fn test_weigh_in_validation() {
        assert_eq!(
            WeighIn::new(0.0, None, None).unwrap_err(),
            BodyWeightError::InvalidWeight(0.0)
        );
        assert!(WeighIn::new(f64::NAN, None, None).is_err());
        assert_eq!(
            WeighIn::new(180.0, Some(120.0), None).unwrap_err(),
            BodyWeightError::InvalidBodyFat(120.0)
        );

        let weigh_in = WeighIn::new(180.4, Some(15.5), Some("  ".to_string())).unwrap();
        assert_eq!(weigh_in.notes, None);
    }

    #[test]
    fn test_range_parsing_and_cutoff() {
        assert_eq!("30d".parse::<BodyWeightRange>(), Ok(BodyWeightRange::Month));
        assert_eq!("ALL".parse::<BodyWeightRange>(), Ok(BodyWeightRange::All));
        assert!("2w".parse::<BodyWeightRange>().is_err());
        assert_eq!(BodyWeightRange::Quarter.to_string(), "90d");

        assert_eq!(BodyWeightRange::Week.cutoff(test_date()), Some(days_ago(7)));
        assert!(BodyWeightRange::Week.contains(test_date(), days_ago(7)));
        assert!(!BodyWeightRange::Week.contains(test_date(), days_ago(8)));
        assert!(BodyWeightRange::All.contains(test_date(), days_ago(4000)));
    }

    #[test]
    fn test_summary_delta_uses_oldest_entry_in_range() {
        let entries = vec![
            make_body_weight(4, test_date(), 181.2, None),
            make_body_weight(3, days_ago(10), 182.0, Some(16.0)),
            make_body_weight(2, days_ago(25), 184.0, None),
            make_body_weight(1, days_ago(60), 190.0, Some(18.0)),
        ];

        let month = summarize(entries.clone(), BodyWeightRange::Month, test_date());
        assert_eq!(month.entries.len(), 3);
        assert_eq!(month.delta, Some(-2.8));
        assert_eq!(month.latest_body_fat, Some(16.0));
        assert!(month.logged_today);

        let all = summarize(entries.clone(), BodyWeightRange::All, test_date());
        assert_eq!(all.delta, Some(-8.8));

        // A single entry in range has nothing to compare against
        let week = summarize(entries, BodyWeightRange::Week, test_date());
        assert_eq!(week.entries.len(), 1);
        assert_eq!(week.delta, None);
        assert_eq!(week.current.map(|e| e.id), Some(4));
    }

    #[test]
    fn test_summary_of_empty_log() {
        let summary = summarize(Vec::new(), BodyWeightRange::Month, test_date());
        assert!(summary.entries.is_empty());
        assert_eq!(summary.current, None);
        assert_eq!(summary.delta, None);
        assert!(!summary.logged_today);
    }

    #[tokio::test]
    async fn test_save_replaces_same_day() {
        let pool = setup_test_db().await;

        let first = WeighIn::new(182.0, None, Some("after breakfast".to_string())).unwrap();
        let saved = save_body_weight(&pool, "sam", test_date(), &first).await.expect("Should save");
        assert_eq!(saved.notes.as_deref(), Some("after breakfast"));

        let second = WeighIn::new(181.4, Some(15.0), None).unwrap();
        let replaced = save_body_weight(&pool, "sam", test_date(), &second).await.expect("Should update");
        assert_eq!(replaced.id, saved.id);
        assert_eq!(replaced.weight_lbs, 181.4);
        assert_eq!(replaced.body_fat_pct, Some(15.0));
        assert_eq!(replaced.notes, None);

        let entries = load_body_weights(&pool, "sam").await.expect("Should load");
        assert_eq!(entries, vec![replaced]);

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_load_newest_first_and_delete() {
        let pool = setup_test_db().await;
        let weigh_in = WeighIn::new(180.0, None, None).unwrap();

        let older = save_body_weight(&pool, "sam", days_ago(3), &weigh_in).await.unwrap();
        let newer = save_body_weight(&pool, "sam", test_date(), &weigh_in).await.unwrap();
        save_body_weight(&pool, "alex", test_date(), &weigh_in).await.unwrap();

        let ids: Vec<i64> = load_body_weights(&pool, "sam").await.unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);

        // Another user's id is not ours to delete
        assert!(!delete_body_weight(&pool, "alex", older.id).await.unwrap());
        assert!(delete_body_weight(&pool, "sam", older.id).await.unwrap());
        assert!(!delete_body_weight(&pool, "sam", older.id).await.unwrap());

        assert_eq!(load_body_weights(&pool, "sam").await.unwrap().len(), 1);

        teardown_test_db(pool).await;
    }
}
