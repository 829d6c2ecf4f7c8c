//! Workout logging service.
//!
//! Workouts are recorded through an HTML form or a JSON API, kept in
//! process memory and summarised as count, total and average minutes.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
