//! Behaviour tests for the in-memory workout store.
//!
//! These scenarios cover id assignment, validation and the statistics the
//! pages display.

use std::cell::RefCell;
use std::sync::Arc;

use fitness_tracker::domain::ports::WorkoutLogError;
use fitness_tracker::domain::{DurationInput, WorkoutId, WorkoutRecord, WorkoutValidationError};
use fitness_tracker::outbound::memory::InMemoryWorkoutStore;
use mockable::DefaultClock;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

struct WorkoutStoreWorld {
    store: RefCell<InMemoryWorkoutStore>,
    last_added: RefCell<Option<Result<WorkoutRecord, WorkoutLogError>>>,
    last_deleted: RefCell<Option<Result<WorkoutRecord, WorkoutLogError>>>,
}

impl WorkoutStoreWorld {
    fn new() -> Self {
        Self {
            store: RefCell::new(InMemoryWorkoutStore::new(Arc::new(DefaultClock))),
            last_added: RefCell::new(None),
            last_deleted: RefCell::new(None),
        }
    }

    fn add(&self, name: &str, duration: &str) {
        let outcome = self
            .store
            .borrow()
            .add_workout(name, DurationInput::from_text(duration));
        *self.last_added.borrow_mut() = Some(outcome);
    }

    fn delete(&self, id: u64) {
        let id = WorkoutId::from_sequence(id).expect("scenario ids are positive");
        let outcome = self.store.borrow().delete_workout(id);
        *self.last_deleted.borrow_mut() = Some(outcome);
    }

    fn with_added<R>(&self, f: impl FnOnce(&Result<WorkoutRecord, WorkoutLogError>) -> R) -> R {
        let outcome = self.last_added.borrow();
        f(outcome.as_ref().expect("a workout should have been added"))
    }
}

#[fixture]
fn world() -> WorkoutStoreWorld {
    WorkoutStoreWorld::new()
}

#[given("an empty workout store")]
fn an_empty_workout_store(world: &WorkoutStoreWorld) {
    *world.store.borrow_mut() = InMemoryWorkoutStore::new(Arc::new(DefaultClock));
}

#[when("the workout {name} lasting {duration} minutes is added")]
fn the_workout_is_added(world: &WorkoutStoreWorld, name: String, duration: String) {
    world.add(&name, &duration);
}

#[when("workout {id} is deleted")]
fn workout_is_deleted(world: &WorkoutStoreWorld, id: u64) {
    world.delete(id);
}

#[then("the store holds {count} workouts")]
fn the_store_holds(world: &WorkoutStoreWorld, count: usize) {
    let listed = world.store.borrow().list_workouts().expect("list succeeds");
    assert_eq!(listed.len(), count);
}

#[then("the last workout has id {id}")]
fn the_last_workout_has_id(world: &WorkoutStoreWorld, id: u64) {
    world.with_added(|outcome| {
        let record = outcome.as_ref().expect("addition succeeds");
        assert_eq!(record.id().get(), id);
    });
}

#[then("the addition is rejected as {reason}")]
fn the_addition_is_rejected(world: &WorkoutStoreWorld, reason: String) {
    world.with_added(|outcome| {
        let Err(WorkoutLogError::Validation { reason: actual }) = outcome else {
            panic!("expected validation failure, got {outcome:?}");
        };
        let expected = match reason.as_str() {
            "EmptyName" => WorkoutValidationError::EmptyName,
            "EmptyDuration" => WorkoutValidationError::EmptyDuration,
            "InvalidDuration" => WorkoutValidationError::InvalidDuration,
            "NonPositiveDuration" => WorkoutValidationError::NonPositiveDuration,
            "DurationTooLarge" => WorkoutValidationError::DurationTooLarge,
            other => panic!("unknown validation reason {other}"),
        };
        assert_eq!(*actual, expected);
    });
}

#[then("the deletion reports workout {id} missing")]
fn the_deletion_reports_missing(world: &WorkoutStoreWorld, id: u64) {
    let outcome = world.last_deleted.borrow();
    let Some(Err(WorkoutLogError::NotFound { id: missing })) = outcome.as_ref() else {
        panic!("expected not found, got {outcome:?}");
    };
    assert_eq!(missing.get(), id);
}

#[then("the total duration is {total} minutes")]
fn the_total_duration_is(world: &WorkoutStoreWorld, total: u128) {
    let stats = world.store.borrow().stats().expect("stats succeed");
    assert_eq!(stats.total_minutes, total);
}

#[then("the average duration is {average} minutes")]
fn the_average_duration_is(world: &WorkoutStoreWorld, average: f64) {
    let stats = world.store.borrow().stats().expect("stats succeed");
    let actual = stats.average_minutes.expect("workouts were recorded");
    assert!((actual - average).abs() < f64::EPSILON, "{actual} != {average}");
}

#[scenario(path = "tests/features/workout_store.feature")]
fn workout_store_scenarios(world: WorkoutStoreWorld) {
    drop(world);
}
