//! HTTP inbound adapter.
//!
//! Two façades share one [`state::HttpState`]: HTML pages for browsers
//! ([`pages`]) and a JSON API ([`workouts`]). [`configure`] registers both
//! together with the health endpoints and the catch-all `404` page.

pub mod error;
pub mod fallback;
pub mod flash;
pub mod health;
pub mod pages;
pub mod render;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod workouts;

pub use error::ApiResult;

use actix_web::web;

/// Register every route on `cfg`.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>` and
/// wrap the app in the session middleware the pages rely on.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use fitness_tracker::inbound::http::configure;
/// use fitness_tracker::inbound::http::health::HealthState;
/// use fitness_tracker::inbound::http::state::HttpState;
/// use fitness_tracker::outbound::memory::InMemoryWorkoutStore;
/// use mockable::DefaultClock;
///
/// let state = HttpState::new(Arc::new(InMemoryWorkoutStore::new(Arc::new(DefaultClock))));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(fallback::path_config())
        .service(pages::index)
        .service(pages::add_workout)
        .service(pages::view_workouts)
        .service(workouts::list_workouts)
        .service(workouts::add_workout)
        .service(workouts::delete_workout)
        .service(health::health)
        .service(health::ready)
        .service(health::live)
        .default_service(web::to(fallback::not_found));
}
