//! Daily readiness check-in
//!
//! Five 1-5 ratings taken before training. The score is their mean rounded
//! to one decimal; one check-in per user per day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;

use crate::db::StoreError;
use crate::models::ReadinessEntry;

const MIN_RATING: u8 = 1;
const MAX_RATING: u8 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReadinessError {
    #[error("{field} rating must be between 1 and 5, got {value}")]
    OutOfRange { field: &'static str, value: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessRatings {
    pub sleep: u8,
    pub stress: u8,
    pub soreness: u8,
    pub motivation: u8,
    pub energy: u8,
}

impl ReadinessRatings {
    pub fn new(
        sleep: u8,
        stress: u8,
        soreness: u8,
        motivation: u8,
        energy: u8,
    ) -> Result<Self, ReadinessError> {
        let ratings = Self {
            sleep,
            stress,
            soreness,
            motivation,
            energy,
        };
        for (field, value) in ratings.fields() {
            if !(MIN_RATING..=MAX_RATING).contains(&value) {
                return Err(ReadinessError::OutOfRange { field, value });
            }
        }
        Ok(ratings)
    }

    fn fields(&self) -> [(&'static str, u8); 5] {
        [
            ("sleep", self.sleep),
            ("stress", self.stress),
            ("soreness", self.soreness),
            ("motivation", self.motivation),
            ("energy", self.energy),
        ]
    }

    /// Mean of the five ratings, one decimal place
    pub fn score(&self) -> f64 {
        let fields = self.fields();
        let total: u32 = fields.iter().map(|(_, v)| u32::from(*v)).sum();
        let mean = f64::from(total) / fields.len() as f64;
        (mean * 10.0).round() / 10.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessBand {
    Low,
    Moderate,
    Good,
    Excellent,
}

impl ReadinessBand {
    pub fn from_score(score: f64) -> Self {
        if score <= 2.0 {
            Self::Low
        } else if score <= 3.0 {
            Self::Moderate
        } else if score <= 4.0 {
            Self::Good
        } else {
            Self::Excellent
        }
    }
}

impl std::fmt::Display for ReadinessBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Good => write!(f, "Good"),
            Self::Excellent => write!(f, "Excellent"),
        }
    }
}

// ---------------------------------------------------------------------------
// Database Operations
// ---------------------------------------------------------------------------

/// Today's check-in, if one was submitted
pub async fn load_readiness(
    pool: &SqlitePool,
    user_id: &str,
    date: NaiveDate,
) -> Result<Option<ReadinessEntry>, StoreError> {
    let entry = sqlx::query_as::<_, ReadinessEntry>(
        r#"
        SELECT user_id, date, sleep, stress, soreness, motivation, energy, score
        FROM readiness_entries
        WHERE user_id = ? AND date = ?
        "#,
    )
    .bind(user_id)
    .bind(date)
    .fetch_optional(pool)
    .await?;

    Ok(entry)
}

/// Record a check-in; resubmitting on the same day replaces it
pub async fn save_readiness(
    pool: &SqlitePool,
    user_id: &str,
    date: NaiveDate,
    ratings: &ReadinessRatings,
) -> Result<ReadinessEntry, StoreError> {
    let score = ratings.score();

    sqlx::query(
        r#"
        INSERT INTO readiness_entries
            (user_id, date, sleep, stress, soreness, motivation, energy, score)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(user_id, date) DO UPDATE SET
            sleep = excluded.sleep,
            stress = excluded.stress,
            soreness = excluded.soreness,
            motivation = excluded.motivation,
            energy = excluded.energy,
            score = excluded.score
        "#,
    )
    .bind(user_id)
    .bind(date)
    .bind(i64::from(ratings.sleep))
    .bind(i64::from(ratings.stress))
    .bind(i64::from(ratings.soreness))
    .bind(i64::from(ratings.motivation))
    .bind(i64::from(ratings.energy))
    .bind(score)
    .execute(pool)
    .await?;

    info!(user = user_id, %date, score, "Readiness check-in saved");

    Ok(ReadinessEntry {
        user_id: user_id.to_string(),
        date,
        sleep: i64::from(ratings.sleep),
        stress: i64::from(ratings.stress),
        soreness: i64::from(ratings.soreness),
        motivation: i64::from(ratings.motivation),
        energy: i64::from(ratings.energy),
        score,
    })
}
