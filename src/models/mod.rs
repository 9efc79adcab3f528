pub mod body_weight;
pub mod readiness;
pub mod swap;
pub mod workout;

pub use body_weight::BodyWeightEntry;
pub use readiness::ReadinessEntry;
pub use swap::ExerciseSwap;
pub use workout::WorkoutEntry;
