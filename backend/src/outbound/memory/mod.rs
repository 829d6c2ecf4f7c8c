//! Process-local storage adapters.

mod workout_store;

pub use workout_store::InMemoryWorkoutStore;
