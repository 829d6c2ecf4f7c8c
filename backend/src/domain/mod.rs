//! Domain primitives and ports.
//!
//! Purpose: Define strongly typed workout entities and the port the inbound
//! adapters drive. Keep types free of HTTP and serialisation concerns and
//! document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Workout types: validated names, durations, records and statistics.
//! - ports: the `WorkoutLog` driving port.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod workouts;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::workouts::{
    DATE_ADDED_FORMAT, DurationInput, DurationMinutes, NewWorkout, WorkoutId, WorkoutName,
    WorkoutRecord, WorkoutStats, WorkoutValidationError,
};
