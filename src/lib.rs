pub mod body_weight;
pub mod catalog;
mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod models;
pub mod periodization;
pub mod progression;
pub mod readiness;
pub mod schedule;
pub mod substitution;
pub mod workout_log;

#[cfg(test)]
mod test_utils;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::AppConfig;
use db::AppState;

pub fn run() -> ExitCode {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let Cli { db, user, command } = Cli::parse();

  let config = match AppConfig::from_env() {
    Ok(config) => config.with_overrides(db, user),
    Err(e) => {
      error!("Invalid configuration: {}", e);
      return ExitCode::FAILURE;
    }
  };

  let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
    Ok(runtime) => runtime,
    Err(e) => {
      error!("Failed to start runtime: {}", e);
      return ExitCode::FAILURE;
    }
  };

  runtime.block_on(async move {
    let pool = match db::initialize_db(&config).await {
      Ok(pool) => pool,
      Err(e) => {
        error!("Failed to initialize database: {}", e);
        return ExitCode::FAILURE;
      }
    };

    let state = AppState { db: pool };
    let result = command.execute(&state, &config.user_id).await;
    state.db.close().await;

    match result {
      Ok(()) => ExitCode::SUCCESS,
      Err(e) => {
        eprintln!("{}", e);
        ExitCode::FAILURE
      }
    }
  })
}
