use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BodyWeightEntry {
  pub id: i64,
  pub user_id: String,
  pub date: NaiveDate,
  pub weight_lbs: f64,
  pub body_fat_pct: Option<f64>,
  pub notes: Option<String>,
}
