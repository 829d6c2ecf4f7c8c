//! Workout log entries and the aggregate statistics derived from them.
//!
//! A [`WorkoutRecord`] is only ever produced from a validated [`NewWorkout`],
//! so every stored record has a non-blank name and a positive duration.
//! Identifiers are assigned by the owning store, never by callers.

use std::fmt;

mod duration;
mod record;
mod stats;

pub use duration::{DurationInput, DurationMinutes};
pub use record::{NewWorkout, WorkoutId, WorkoutName, WorkoutRecord, DATE_ADDED_FORMAT};
pub use stats::WorkoutStats;

/// Validation failures raised while turning raw input into a [`NewWorkout`].
///
/// Checks run in declaration order: the name is validated before the
/// duration, and an empty duration is reported before a malformed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutValidationError {
    EmptyName,
    EmptyDuration,
    InvalidDuration,
    NonPositiveDuration,
    /// A positive whole number of minutes that does not fit in a `u64`.
    DurationTooLarge,
}

impl fmt::Display for WorkoutValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "workout name must not be blank"),
            Self::EmptyDuration => write!(f, "workout duration must be provided"),
            Self::InvalidDuration => write!(f, "workout duration must be a whole number"),
            Self::NonPositiveDuration => {
                write!(f, "workout duration must be greater than zero")
            }
            Self::DurationTooLarge => write!(f, "workout duration exceeds {} minutes", u64::MAX),
        }
    }
}

impl std::error::Error for WorkoutValidationError {}
