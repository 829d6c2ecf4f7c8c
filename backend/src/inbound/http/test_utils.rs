//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::DefaultClock;

use super::configure;
use super::health::HealthState;
use super::session_config::SESSION_COOKIE_NAME;
use super::state::HttpState;
use crate::domain::ports::WorkoutLog;
use crate::outbound::memory::InMemoryWorkoutStore;

pub const SESSION_COOKIE: &str = SESSION_COOKIE_NAME;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Disables the `Secure` flag for local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// Fresh in-memory store behind the port.
pub fn memory_log() -> Arc<dyn WorkoutLog> {
    Arc::new(InMemoryWorkoutStore::new(Arc::new(DefaultClock)))
}

/// Handler state wrapping `log`.
pub fn state_for(log: Arc<dyn WorkoutLog>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(log))
}

/// Fully routed application backed by `log`, as the server builds it.
pub fn test_app(
    log: Arc<dyn WorkoutLog>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    App::new()
        .app_data(state_for(log))
        .app_data(health)
        .wrap(test_session_middleware())
        .configure(configure)
}
