use chrono::NaiveDate;
use serde::Serialize;

use crate::db::AppState;
use crate::models::ReadinessEntry;
use crate::readiness::{load_readiness, save_readiness, ReadinessBand, ReadinessRatings};

#[derive(Debug, Serialize)]
pub struct ReadinessSummary {
  #[serde(flatten)]
  pub entry: ReadinessEntry,
  pub band: ReadinessBand,
}

impl From<ReadinessEntry> for ReadinessSummary {
  fn from(entry: ReadinessEntry) -> Self {
    let band = ReadinessBand::from_score(entry.score);
    Self { entry, band }
  }
}

#[allow(clippy::too_many_arguments)]
pub async fn submit_readiness(
  state: &AppState,
  user_id: &str,
  date: NaiveDate,
  sleep: u8,
  stress: u8,
  soreness: u8,
  motivation: u8,
  energy: u8,
) -> Result<ReadinessSummary, String> {
  let ratings = ReadinessRatings::new(sleep, stress, soreness, motivation, energy)
    .map_err(|e| e.to_string())?;
  save_readiness(&state.db, user_id, date, &ratings)
    .await
    .map(ReadinessSummary::from)
    .map_err(|e| format!("Failed to save readiness: {}", e))
}

pub async fn get_readiness(
  state: &AppState,
  user_id: &str,
  date: NaiveDate,
) -> Result<Option<ReadinessSummary>, String> {
  load_readiness(&state.db, user_id, date)
    .await
    .map(|entry| entry.map(ReadinessSummary::from))
    .map_err(|e| format!("Failed to load readiness: {}", e))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{setup_test_db, teardown_test_db, test_date};

  #[tokio::test]
  async fn test_submit_and_get() {
    let state = AppState { db: setup_test_db().await };

    assert!(get_readiness(&state, "sam", test_date()).await.unwrap().is_none());

    let summary = submit_readiness(&state, "sam", test_date(), 3, 2, 3, 2, 2)
      .await
      .expect("Should save");
    assert_eq!(summary.entry.score, 2.4);
    assert_eq!(summary.band, ReadinessBand::Moderate);

    let loaded = get_readiness(&state, "sam", test_date()).await.unwrap().unwrap();
    assert_eq!(loaded.band, ReadinessBand::Moderate);

    let err = submit_readiness(&state, "sam", test_date(), 3, 2, 9, 2, 2)
      .await
      .unwrap_err();
    assert!(err.contains("soreness"));

    teardown_test_db(state.db).await;
  }
}
