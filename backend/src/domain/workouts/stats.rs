//! Aggregate statistics over the current workout log.

use super::WorkoutRecord;

/// Count, total and mean duration of a set of workouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutStats {
    pub count: usize,
    pub total_minutes: u128,
    /// Mean duration in minutes; `None` when there are no workouts.
    pub average_minutes: Option<f64>,
}

impl WorkoutStats {
    /// Summarise `records`.
    ///
    /// # Examples
    /// ```
    /// use fitness_tracker::domain::WorkoutStats;
    ///
    /// let empty = WorkoutStats::from_records(&[]);
    /// assert_eq!(empty.count, 0);
    /// assert_eq!(empty.total_minutes, 0);
    /// assert!(empty.average_minutes.is_none());
    /// ```
    pub fn from_records(records: &[WorkoutRecord]) -> Self {
        let count = records.len();
        let total_minutes = records
            .iter()
            .map(|record| u128::from(record.duration().get()))
            .sum::<u128>();
        Self {
            count,
            total_minutes,
            average_minutes: mean(total_minutes, count),
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "the mean is a display value; rounding very large totals is acceptable"
)]
fn mean(total: u128, count: usize) -> Option<f64> {
    (count > 0).then(|| total as f64 / count as f64)
}
