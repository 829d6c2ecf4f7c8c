//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod workout_log;

#[cfg(test)]
pub use workout_log::MockWorkoutLog;
pub use workout_log::{WorkoutLog, WorkoutLogError};
