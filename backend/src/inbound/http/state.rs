//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they depend only
//! on the [`WorkoutLog`] port and stay testable against mocks.

use std::sync::Arc;

use crate::domain::ports::WorkoutLog;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use fitness_tracker::inbound::http::state::HttpState;
/// use fitness_tracker::outbound::memory::InMemoryWorkoutStore;
/// use mockable::DefaultClock;
///
/// let state = HttpState::new(Arc::new(InMemoryWorkoutStore::new(Arc::new(DefaultClock))));
/// let _log = Arc::clone(&state.workouts);
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// The one workout log both façades drive.
    pub workouts: Arc<dyn WorkoutLog>,
}

impl HttpState {
    /// Wrap a workout log implementation.
    pub fn new(workouts: Arc<dyn WorkoutLog>) -> Self {
        Self { workouts }
    }
}
