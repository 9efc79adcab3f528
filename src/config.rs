//! Runtime configuration
//!
//! Read from the environment (a `.env` file is loaded first by `run`).

use std::env;

const DB_PATH_VAR: &str = "LIFT_LOG_DB_PATH";
const USER_VAR: &str = "LIFT_LOG_USER";
const MAX_CONNECTIONS_VAR: &str = "LIFT_LOG_MAX_CONNECTIONS";

const DEFAULT_DB_PATH: &str = "lift-log.db";
const DEFAULT_USER: &str = "local";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Path value that selects a throwaway in-memory database
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Invalid value for {name}: {value:?}")]
  Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub db_path: String,
  pub user_id: String,
  pub max_connections: u32,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      db_path: DEFAULT_DB_PATH.to_string(),
      user_id: DEFAULT_USER.to_string(),
      max_connections: DEFAULT_MAX_CONNECTIONS,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let max_connections = match env::var(MAX_CONNECTIONS_VAR) {
      Ok(raw) => raw
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or(ConfigError::Invalid {
          name: MAX_CONNECTIONS_VAR,
          value: raw,
        })?,
      Err(_) => defaults.max_connections,
    };

    Ok(Self {
      db_path: non_empty_var(DB_PATH_VAR).unwrap_or(defaults.db_path),
      user_id: non_empty_var(USER_VAR).unwrap_or(defaults.user_id),
      max_connections,
    })
  }

  /// Apply command-line overrides on top of the environment
  pub fn with_overrides(mut self, db_path: Option<String>, user_id: Option<String>) -> Self {
    if let Some(path) = db_path {
      self.db_path = path;
    }
    if let Some(user) = user_id {
      self.user_id = user;
    }
    self
  }

  pub fn is_in_memory(&self) -> bool {
    self.db_path == IN_MEMORY
  }

  pub fn database_url(&self) -> String {
    if self.is_in_memory() {
      "sqlite::memory:".to_string()
    } else {
      format!("sqlite://{}?mode=rwc", self.db_path)
    }
  }
}

fn non_empty_var(name: &str) -> Option<String> {
  env::var(name).ok().filter(|v| !v.trim().is_empty())
}
