//! Driving port for the workout log.
//!
//! Both HTTP façades talk to the log through [`WorkoutLog`] so they share
//! one validation path and never touch storage directly.

use async_trait::async_trait;

use crate::domain::{
    DurationInput, Error, WorkoutId, WorkoutRecord, WorkoutStats, WorkoutValidationError,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised by workout log adapters.
    pub enum WorkoutLogError {
        /// Input was rejected before any record was created.
        Validation { reason: WorkoutValidationError } => "invalid workout: {reason}",
        /// No stored workout carries the requested identifier.
        NotFound { id: WorkoutId } => "workout {id} not found",
        /// The backing store failed unexpectedly.
        Storage { message: String } => "workout storage failed: {message}",
    }
}

impl From<WorkoutValidationError> for WorkoutLogError {
    fn from(reason: WorkoutValidationError) -> Self {
        Self::Validation { reason }
    }
}

impl From<WorkoutLogError> for Error {
    fn from(value: WorkoutLogError) -> Self {
        match value {
            WorkoutLogError::Validation { reason } => Error::invalid_request(reason.to_string()),
            WorkoutLogError::NotFound { .. } => Error::not_found("Workout not found"),
            WorkoutLogError::Storage { message } => Error::internal(message),
        }
    }
}

/// Port for recording, listing and removing workouts.
///
/// Implementations own id assignment: ids follow the order of successful
/// insertions and are never handed out twice, even after deletions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutLog: Send + Sync {
    /// Validate and store a workout, returning the stored record.
    async fn add_workout(
        &self,
        name: &str,
        duration: DurationInput,
    ) -> Result<WorkoutRecord, WorkoutLogError>;

    /// All stored workouts in insertion order.
    async fn list_workouts(&self) -> Result<Vec<WorkoutRecord>, WorkoutLogError>;

    /// Remove the workout with `id`, returning it.
    async fn delete_workout(&self, id: WorkoutId) -> Result<WorkoutRecord, WorkoutLogError>;

    /// Aggregate statistics over the stored workouts.
    async fn stats(&self) -> Result<WorkoutStats, WorkoutLogError>;

    /// Number of stored workouts.
    async fn count(&self) -> Result<usize, WorkoutLogError>;
}
