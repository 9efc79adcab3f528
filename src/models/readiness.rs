use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ReadinessEntry {
  pub user_id: String,
  pub date: NaiveDate,
  pub sleep: i64,
  pub stress: i64,
  pub soreness: i64,
  pub motivation: i64,
  pub energy: i64,
  pub score: f64,
}
