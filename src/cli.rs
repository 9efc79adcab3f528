//! Command-line front end over `commands`. Results are printed as JSON.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::body_weight::BodyWeightRange;
use crate::commands::{body_weight, program, readiness, swaps, workouts};
use crate::db::AppState;
use crate::workout_log::EntryEdit;

#[derive(Debug, Parser)]
#[command(name = "lift-log", version, about = "8-week hypertrophy program tracker")]
pub struct Cli {
  /// SQLite database path (overrides LIFT_LOG_DB_PATH)
  #[arg(long, global = true)]
  pub db: Option<String>,

  /// User identity (overrides LIFT_LOG_USER)
  #[arg(long, global = true)]
  pub user: Option<String>,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Resolved schedule for a week, optionally a single day
  Schedule {
    #[arg(long, short)]
    week: u32,
    #[arg(long, short)]
    day: Option<u8>,
  },
  /// Training phase a week falls in
  Phase { week: u32 },
  /// Every exercise in the program
  Exercises,
  /// Target load and sets for weeks 1-8
  Targets { exercise: String },
  /// Substitutes available for an exercise
  SwapOptions { exercise: String },
  /// Replace an exercise with one of its substitutes
  Swap { exercise: String, substitute: String },
  /// Go back to the prescribed exercise
  ResetSwap { exercise: String },
  /// Everything the workout screen shows for a week
  Page {
    #[arg(long, short)]
    week: u32,
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Mark a set done (or undone)
  Toggle {
    #[arg(long, short)]
    week: u32,
    #[arg(long, short)]
    day: u8,
    exercise: String,
    set: u32,
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Record the weight or reps actually used for a set
  Update {
    #[arg(long, short)]
    week: u32,
    #[arg(long, short)]
    day: u8,
    exercise: String,
    set: u32,
    #[arg(long, conflicts_with = "reps", required_unless_present = "reps")]
    weight: Option<String>,
    #[arg(long)]
    reps: Option<String>,
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// All sets logged against an exercise
  History { exercise: String },
  /// Heaviest completed set of an exercise in each program week
  Progress { exercise: String },
  /// Completed sets and volume per calendar week
  Volume {
    /// Look-back window in days
    #[arg(long, default_value_t = workouts::VOLUME_WINDOW_DAYS)]
    days: u32,
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Show the readiness check-in for a day
  Readiness {
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Submit the daily readiness check-in (each rating 1-5)
  CheckIn {
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    sleep: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    stress: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    soreness: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    motivation: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    energy: u8,
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Log the day's body weight (replaces an earlier weigh-in that day)
  Weigh {
    weight: f64,
    #[arg(long)]
    body_fat: Option<f64>,
    #[arg(long)]
    notes: Option<String>,
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Body-weight entries and change over a range (7d, 30d, 90d, all)
  BodyWeight {
    #[arg(long, default_value_t = BodyWeightRange::Month)]
    range: BodyWeightRange,
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Delete a body-weight entry by id
  DeleteWeight { id: i64 },
}

fn today() -> NaiveDate {
  Local::now().date_naive()
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
  let json = serde_json::to_string_pretty(value).map_err(|e| format!("Failed to render output: {}", e))?;
  println!("{}", json);
  Ok(())
}

impl Command {
  pub async fn execute(self, state: &AppState, user_id: &str) -> Result<(), String> {
    match self {
      Command::Schedule { week, day } => {
        let schedule = program::get_week_schedule(state, user_id, week).await?;
        match (schedule, day) {
          (Some(schedule), Some(day)) => print_json(&schedule.day(day)),
          (schedule, _) => print_json(&schedule),
        }
      }
      Command::Phase { week } => print_json(&program::get_phase(week)),
      Command::Exercises => print_json(&program::list_exercises()),
      Command::Targets { exercise } => print_json(&program::get_exercise_targets(&exercise)?),
      Command::SwapOptions { exercise } => {
        print_json(&swaps::get_swap_options(state, user_id, &exercise).await?)
      }
      Command::Swap { exercise, substitute } => {
        print_json(&swaps::swap_exercise(state, user_id, &exercise, &substitute).await?)
      }
      Command::ResetSwap { exercise } => {
        print_json(&swaps::reset_swap(state, user_id, &exercise).await?)
      }
      Command::Page { week, date } => {
        let date = date.unwrap_or_else(today);
        print_json(&workouts::load_workout_page(state, user_id, week, date).await?)
      }
      Command::Toggle { week, day, exercise, set, date } => {
        let date = date.unwrap_or_else(today);
        print_json(&workouts::toggle_set(state, user_id, week, day, &exercise, set, date).await?)
      }
      Command::Update { week, day, exercise, set, weight, reps, date } => {
        let date = date.unwrap_or_else(today);
        let edit = match (weight, reps) {
          (Some(weight), _) => EntryEdit::weight(&weight),
          (None, Some(reps)) => EntryEdit::reps(&reps),
          (None, None) => return Err("Either --weight or --reps is required".to_string()),
        };
        print_json(&workouts::update_set(state, user_id, week, day, &exercise, set, date, edit).await?)
      }
      Command::History { exercise } => {
        print_json(&workouts::get_load_history(state, user_id, &exercise).await?)
      }
      Command::Progress { exercise } => {
        print_json(&workouts::get_progress_by_week(state, user_id, &exercise).await?)
      }
      Command::Volume { days, date } => {
        let date = date.unwrap_or_else(today);
        print_json(&workouts::get_weekly_volume(state, user_id, date, days).await?)
      }
      Command::Readiness { date } => {
        let date = date.unwrap_or_else(today);
        print_json(&readiness::get_readiness(state, user_id, date).await?)
      }
      Command::CheckIn { sleep, stress, soreness, motivation, energy, date } => {
        let date = date.unwrap_or_else(today);
        let summary = readiness::submit_readiness(
          state, user_id, date, sleep, stress, soreness, motivation, energy,
        )
        .await?;
        print_json(&summary)
      }
      Command::Weigh { weight, body_fat, notes, date } => {
        let date = date.unwrap_or_else(today);
        print_json(&body_weight::log_body_weight(state, user_id, date, weight, body_fat, notes).await?)
      }
      Command::BodyWeight { range, date } => {
        let date = date.unwrap_or_else(today);
        print_json(&body_weight::get_body_weight(state, user_id, range, date).await?)
      }
      Command::DeleteWeight { id } => {
        body_weight::delete_body_weight(state, user_id, id).await?;
        print_json(&serde_json::json!({ "deleted": id }))
      }
    }
  }
}
