//! Workout records and their validated building blocks.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, Timelike};

use super::{DurationInput, DurationMinutes, WorkoutValidationError};

/// `strftime` pattern used when presenting [`WorkoutRecord::created_at`].
pub const DATE_ADDED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Store-assigned workout identifier, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutId(u64);

impl WorkoutId {
    /// Identifier for the `sequence`-th successful insertion (1-based).
    ///
    /// Returns `None` for zero, which never names a workout.
    pub fn from_sequence(sequence: u64) -> Option<Self> {
        (sequence > 0).then_some(Self(sequence))
    }

    /// Raw identifier value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Workout name with surrounding whitespace removed.
///
/// ## Invariants
/// - Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkoutName(String);

impl WorkoutName {
    /// Trim and validate a workout name.
    ///
    /// # Examples
    /// ```
    /// use fitness_tracker::domain::{WorkoutName, WorkoutValidationError};
    ///
    /// let name = WorkoutName::new("  Push-ups ")?;
    /// assert_eq!(name.as_ref(), "Push-ups");
    /// assert_eq!(WorkoutName::new("\t"), Err(WorkoutValidationError::EmptyName));
    /// # Ok::<(), WorkoutValidationError>(())
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, WorkoutValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WorkoutValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for WorkoutName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for WorkoutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated workout that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    pub name: WorkoutName,
    pub duration: DurationMinutes,
}

impl NewWorkout {
    /// Validate raw inbound values. The name is checked before the duration.
    ///
    /// # Examples
    /// ```
    /// use fitness_tracker::domain::{DurationInput, NewWorkout, WorkoutValidationError};
    ///
    /// let workout = NewWorkout::parse("Running", DurationInput::Integer(45))?;
    /// assert_eq!(workout.duration.get(), 45);
    ///
    /// let err = NewWorkout::parse(" ", DurationInput::Text("oops".into())).unwrap_err();
    /// assert_eq!(err, WorkoutValidationError::EmptyName);
    /// # Ok::<(), WorkoutValidationError>(())
    /// ```
    pub fn parse(name: &str, duration: DurationInput) -> Result<Self, WorkoutValidationError> {
        let name = WorkoutName::new(name)?;
        let duration = DurationMinutes::parse(duration)?;
        Ok(Self { name, duration })
    }
}

/// A stored workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutRecord {
    id: WorkoutId,
    name: WorkoutName,
    duration: DurationMinutes,
    created_at: NaiveDateTime,
}

impl WorkoutRecord {
    /// Stamp a validated workout with its identifier and insertion time.
    ///
    /// The timestamp is kept as local wall-clock time truncated to whole
    /// seconds.
    pub fn new(id: WorkoutId, workout: NewWorkout, created_at: DateTime<Local>) -> Self {
        let local = created_at.naive_local();
        let created_at = local.with_nanosecond(0).unwrap_or(local);
        Self {
            id,
            name: workout.name,
            duration: workout.duration,
            created_at,
        }
    }

    pub fn id(&self) -> WorkoutId {
        self.id
    }

    pub fn name(&self) -> &WorkoutName {
        &self.name
    }

    pub fn duration(&self) -> DurationMinutes {
        self.duration
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Insertion time rendered with [`DATE_ADDED_FORMAT`].
    pub fn date_added(&self) -> String {
        self.created_at.format(DATE_ADDED_FORMAT).to_string()
    }
}
