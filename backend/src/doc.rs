//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] describes the JSON API and the health endpoints. The HTML
//! pages are deliberately absent. Swagger UI serves the document at
//! `/docs` in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::health::HealthReport;
use crate::inbound::http::workouts::{
    AddWorkoutRequest, WorkoutBody, WorkoutCreatedResponse, WorkoutDeletedResponse,
    WorkoutListResponse,
};

/// OpenAPI document for the JSON API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ACEest Fitness Tracker API",
        description = "Record, list and delete workouts; report service health."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::workouts::list_workouts,
        crate::inbound::http::workouts::add_workout,
        crate::inbound::http::workouts::delete_workout,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AddWorkoutRequest,
        WorkoutBody,
        WorkoutListResponse,
        WorkoutCreatedResponse,
        WorkoutDeletedResponse,
        ErrorEnvelope,
        HealthReport,
    )),
    tags(
        (name = "workouts", description = "Workout log operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    #[rstest]
    #[case("/api/workouts")]
    #[case("/api/workouts/{id}")]
    #[case("/health")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn documents_every_json_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    #[case("WorkoutBody", &["id", "workout", "duration", "date_added"])]
    #[case("ErrorEnvelope", &["success", "error"])]
    #[case("WorkoutListResponse", &["success", "workouts", "total_count"])]
    fn schemas_carry_wire_field_names(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let Some(RefOr::T(Schema::Object(object))) = schemas.get(name) else {
            panic!("expected object schema for {name}");
        };
        for field in fields {
            assert!(object.properties.contains_key(*field), "{name}.{field}");
        }
    }
}
