//! Workout duration parsing.

use std::fmt;

use super::WorkoutValidationError;

/// Raw duration value as it arrived from an inbound adapter.
///
/// Adapters decide which of their encodings count as "absent"; this type
/// only records the shape so the parsing rules live in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum DurationInput {
    /// No usable value was supplied.
    Missing,
    /// Free text, typically from a form field or a JSON string.
    Text(String),
    /// A whole number.
    Integer(i64),
    /// A number with a fractional representation, such as a JSON float.
    Decimal(f64),
    /// A value with no numeric reading, such as a non-empty list or object.
    NonNumeric,
}

impl DurationInput {
    /// Wrap a text field, treating a blank value as missing.
    ///
    /// # Examples
    /// ```
    /// use fitness_tracker::domain::DurationInput;
    ///
    /// assert_eq!(DurationInput::from_text("   "), DurationInput::Missing);
    /// assert_eq!(
    ///     DurationInput::from_text(" 30 "),
    ///     DurationInput::Text("30".to_owned())
    /// );
    /// ```
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Missing
        } else {
            Self::Text(trimmed.to_owned())
        }
    }
}

/// A strictly positive number of minutes, at most [`u64::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DurationMinutes(u64);

impl DurationMinutes {
    /// Parse a duration, applying the emptiness, numeric, sign and range
    /// checks in that order.
    ///
    /// Decimals are truncated toward zero before the sign check, so `12.5`
    /// is twelve minutes and `0.5` is not positive.
    ///
    /// # Examples
    /// ```
    /// use fitness_tracker::domain::{DurationInput, DurationMinutes, WorkoutValidationError};
    ///
    /// let minutes = DurationMinutes::parse(DurationInput::from_text("45"))?;
    /// assert_eq!(minutes.get(), 45);
    ///
    /// let err = DurationMinutes::parse(DurationInput::from_text("12.5")).unwrap_err();
    /// assert_eq!(err, WorkoutValidationError::InvalidDuration);
    ///
    /// let truncated = DurationMinutes::parse(DurationInput::Decimal(12.5))?;
    /// assert_eq!(truncated.get(), 12);
    /// # Ok::<(), WorkoutValidationError>(())
    /// ```
    pub fn parse(input: DurationInput) -> Result<Self, WorkoutValidationError> {
        match input {
            DurationInput::Missing => Err(WorkoutValidationError::EmptyDuration),
            DurationInput::Text(text) => parse_whole_text(&text).map(Self),
            DurationInput::Integer(value) => Self::try_from_minutes(value),
            DurationInput::Decimal(value) => truncate_decimal(value).map(Self),
            DurationInput::NonNumeric => Err(WorkoutValidationError::InvalidDuration),
        }
    }

    /// Validate an already numeric minute count.
    pub fn try_from_minutes(value: i64) -> Result<Self, WorkoutValidationError> {
        u64::try_from(value)
            .ok()
            .filter(|minutes| *minutes > 0)
            .map(Self)
            .ok_or(WorkoutValidationError::NonPositiveDuration)
    }

    /// Number of minutes.
    pub fn get(self) -> u64 {
        self.0
    }
}

// Signed decimal digits with surrounding whitespace. The sign is judged
// before the magnitude, so any negative literal is non-positive however long.
fn parse_whole_text(text: &str) -> Result<u64, WorkoutValidationError> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..).unwrap_or_default()),
        Some(b'+') => (false, trimmed.get(1..).unwrap_or_default()),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(WorkoutValidationError::InvalidDuration);
    }
    let significant = digits.trim_start_matches('0');
    if negative || significant.is_empty() {
        return Err(WorkoutValidationError::NonPositiveDuration);
    }
    significant
        .parse::<u64>()
        .map_err(|_| WorkoutValidationError::DurationTooLarge)
}

fn truncate_decimal(value: f64) -> Result<u64, WorkoutValidationError> {
    // 2^64, the first magnitude outside the u64 range.
    const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;
    if value.is_nan() {
        return Err(WorkoutValidationError::InvalidDuration);
    }
    let whole = value.trunc();
    if whole < 1.0 {
        return Err(WorkoutValidationError::NonPositiveDuration);
    }
    if whole >= U64_BOUND {
        return Err(WorkoutValidationError::DurationTooLarge);
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is integral, at least one and below 2^64"
    )]
    let minutes = whole as u64;
    Ok(minutes)
}

impl fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
