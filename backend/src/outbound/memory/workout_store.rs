//! In-process workout store.
//!
//! One lock guards the record sequence and the insertion counter together,
//! so id assignment and appends are serialised and readers always see a
//! complete snapshot.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{WorkoutLog, WorkoutLogError};
use crate::domain::{DurationInput, NewWorkout, WorkoutId, WorkoutRecord, WorkoutStats};

#[derive(Debug, Default)]
struct WorkoutLedger {
    records: Vec<WorkoutRecord>,
    // Successful insertions so far; never decremented.
    inserted: u64,
}

/// Workout log held in process memory for the lifetime of the server.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use fitness_tracker::domain::DurationInput;
/// use fitness_tracker::outbound::memory::InMemoryWorkoutStore;
/// use mockable::DefaultClock;
///
/// let store = InMemoryWorkoutStore::new(Arc::new(DefaultClock));
/// let record = store.add_workout("Rowing", DurationInput::Integer(20))?;
/// assert_eq!(record.id().get(), 1);
/// assert_eq!(store.list_workouts()?.len(), 1);
/// # Ok::<(), fitness_tracker::domain::ports::WorkoutLogError>(())
/// ```
pub struct InMemoryWorkoutStore {
    ledger: RwLock<WorkoutLedger>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl InMemoryWorkoutStore {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            ledger: RwLock::new(WorkoutLedger::default()),
            clock,
        }
    }

    /// Validate and append a workout.
    ///
    /// # Errors
    /// Returns [`WorkoutLogError::Validation`] when the name or duration is
    /// rejected; the store is left untouched in that case.
    pub fn add_workout(
        &self,
        name: &str,
        duration: DurationInput,
    ) -> Result<WorkoutRecord, WorkoutLogError> {
        let workout = NewWorkout::parse(name, duration)?;
        let mut ledger = self.write()?;
        let sequence = ledger
            .inserted
            .checked_add(1)
            .ok_or_else(|| WorkoutLogError::storage("workout id sequence exhausted"))?;
        let id = WorkoutId::from_sequence(sequence)
            .ok_or_else(|| WorkoutLogError::storage("workout id sequence exhausted"))?;
        let record = WorkoutRecord::new(id, workout, self.clock.local());
        ledger.records.push(record.clone());
        ledger.inserted = sequence;
        info!(
            workout_id = %record.id(),
            duration_minutes = record.duration().get(),
            "workout recorded"
        );
        Ok(record)
    }

    /// Snapshot of every stored workout in insertion order.
    pub fn list_workouts(&self) -> Result<Vec<WorkoutRecord>, WorkoutLogError> {
        Ok(self.read()?.records.clone())
    }

    /// Remove the workout with `id`.
    ///
    /// # Errors
    /// Returns [`WorkoutLogError::NotFound`] when no record carries `id`.
    pub fn delete_workout(&self, id: WorkoutId) -> Result<WorkoutRecord, WorkoutLogError> {
        let mut ledger = self.write()?;
        let position = ledger
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| WorkoutLogError::not_found(id))?;
        let removed = ledger.records.remove(position);
        info!(workout_id = %id, "workout deleted");
        Ok(removed)
    }

    /// Count, total and average duration of the stored workouts.
    pub fn stats(&self) -> Result<WorkoutStats, WorkoutLogError> {
        let ledger = self.read()?;
        let stats = WorkoutStats::from_records(&ledger.records);
        debug!(count = stats.count, total_minutes = %stats.total_minutes, "computed stats");
        Ok(stats)
    }

    /// Number of stored workouts.
    pub fn count(&self) -> Result<usize, WorkoutLogError> {
        Ok(self.read()?.records.len())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, WorkoutLedger>, WorkoutLogError> {
        self.ledger
            .read()
            .map_err(|_| WorkoutLogError::storage("workout store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, WorkoutLedger>, WorkoutLogError> {
        self.ledger
            .write()
            .map_err(|_| WorkoutLogError::storage("workout store lock poisoned"))
    }
}

#[async_trait]
impl WorkoutLog for InMemoryWorkoutStore {
    async fn add_workout(
        &self,
        name: &str,
        duration: DurationInput,
    ) -> Result<WorkoutRecord, WorkoutLogError> {
        Self::add_workout(self, name, duration)
    }

    async fn list_workouts(&self) -> Result<Vec<WorkoutRecord>, WorkoutLogError> {
        Self::list_workouts(self)
    }

    async fn delete_workout(&self, id: WorkoutId) -> Result<WorkoutRecord, WorkoutLogError> {
        Self::delete_workout(self, id)
    }

    async fn stats(&self) -> Result<WorkoutStats, WorkoutLogError> {
        Self::stats(self)
    }

    async fn count(&self) -> Result<usize, WorkoutLogError> {
        Self::count(self)
    }
}

#[cfg(test)]
#[path = "workout_store_tests.rs"]
mod tests;
