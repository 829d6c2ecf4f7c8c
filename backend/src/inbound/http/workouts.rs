//! JSON API façade over the workout log.
//!
//! ```text
//! GET    /api/workouts
//! POST   /api/workouts
//! DELETE /api/workouts/{id}
//! ```
//!
//! Request bodies are read as raw bytes and classified by hand so loosely
//! typed clients get the same messages regardless of how they encode the
//! duration. Failures use the envelope from [`super::error`].

use std::num::FpCategory;

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::ports::WorkoutLogError;
use crate::domain::{DurationInput, Error, WorkoutId, WorkoutRecord, WorkoutValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

const NO_DATA_PROVIDED: &str = "No data provided";

/// Stored workout as exposed over JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutBody {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Deadlifts")]
    pub workout: String,
    /// Minutes, always positive.
    #[schema(example = 40)]
    pub duration: u64,
    #[schema(example = "2025-03-14 07:30:05")]
    pub date_added: String,
}

impl From<&WorkoutRecord> for WorkoutBody {
    fn from(record: &WorkoutRecord) -> Self {
        Self {
            id: record.id().get(),
            workout: record.name().as_ref().to_owned(),
            duration: record.duration().get(),
            date_added: record.date_added(),
        }
    }
}

/// Documented request shape for `POST /api/workouts`.
///
/// The handler accepts looser input than this: `duration` may also be a
/// numeric string or an integral float.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddWorkoutRequest {
    #[schema(example = "Deadlifts")]
    pub workout_name: String,
    #[schema(example = 40)]
    pub duration: i64,
}

/// Response for `GET /api/workouts`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutListResponse {
    pub success: bool,
    pub workouts: Vec<WorkoutBody>,
    pub total_count: usize,
}

/// Response for a successful `POST /api/workouts`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutCreatedResponse {
    pub success: bool,
    #[schema(example = "Deadlifts added successfully!")]
    pub message: String,
    pub workout: WorkoutBody,
}

/// Response for a successful `DELETE /api/workouts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutDeletedResponse {
    pub success: bool,
    #[schema(example = "Workout 'Deadlifts' deleted successfully!")]
    pub message: String,
}

/// Reasons a JSON body is rejected before validation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiInputError {
    /// Body absent, unparseable, falsy, or not an object.
    #[error("No data provided")]
    NoDataProvided,
}

/// Name and duration pulled out of a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiWorkoutInput {
    pub name: String,
    pub duration: DurationInput,
}

impl ApiWorkoutInput {
    /// Classify a raw request body.
    ///
    /// A non-string `workout_name` counts as missing. `duration` follows
    /// [`classify_duration`].
    ///
    /// # Errors
    /// Returns [`ApiInputError::NoDataProvided`] unless the body is a
    /// non-empty JSON object.
    ///
    /// # Examples
    /// ```
    /// use fitness_tracker::domain::DurationInput;
    /// use fitness_tracker::inbound::http::workouts::{ApiInputError, ApiWorkoutInput};
    ///
    /// let input = ApiWorkoutInput::from_body(br#"{"workout_name":"Rowing","duration":"25"}"#)?;
    /// assert_eq!(input.name, "Rowing");
    /// assert_eq!(input.duration, DurationInput::Text("25".to_owned()));
    /// assert_eq!(ApiWorkoutInput::from_body(b"{}"), Err(ApiInputError::NoDataProvided));
    /// # Ok::<(), ApiInputError>(())
    /// ```
    pub fn from_body(body: &[u8]) -> Result<Self, ApiInputError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| ApiInputError::NoDataProvided)?;
        match value {
            Value::Object(fields) if !fields.is_empty() => Ok(Self::from_fields(&fields)),
            _ => Err(ApiInputError::NoDataProvided),
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        let name = match fields.get("workout_name") {
            Some(Value::String(name)) => name.clone(),
            _ => String::new(),
        };
        Self {
            name,
            duration: classify_duration(fields.get("duration")),
        }
    }
}

/// Map a JSON `duration` value onto [`DurationInput`].
///
/// Falsy values (`null`, `false`, `0`, `""`, `[]`, `{}`) and an absent
/// field count as missing, so a literal `0` reports "required" rather than
/// "positive". `true` reads as one minute. Non-empty strings are passed on
/// untrimmed, so a blank string is a malformed number rather than a
/// missing one.
#[must_use]
pub fn classify_duration(value: Option<&Value>) -> DurationInput {
    let Some(value) = value else {
        return DurationInput::Missing;
    };
    match value {
        Value::Null | Value::Bool(false) => DurationInput::Missing,
        Value::Bool(true) => DurationInput::Integer(1),
        Value::Number(number) => {
            if let Some(whole) = number.as_i64() {
                if whole == 0 {
                    DurationInput::Missing
                } else {
                    DurationInput::Integer(whole)
                }
            } else if let Some(large) = number.as_u64() {
                // Above i64::MAX; the text parser covers the full u64 range.
                DurationInput::Text(large.to_string())
            } else {
                match number.as_f64() {
                    Some(decimal) if decimal.classify() == FpCategory::Zero => {
                        DurationInput::Missing
                    }
                    Some(decimal) => DurationInput::Decimal(decimal),
                    None => DurationInput::NonNumeric,
                }
            }
        }
        Value::String(text) if text.is_empty() => DurationInput::Missing,
        Value::String(text) => DurationInput::Text(text.clone()),
        Value::Array(items) if items.is_empty() => DurationInput::Missing,
        Value::Object(fields) if fields.is_empty() => DurationInput::Missing,
        Value::Array(_) | Value::Object(_) => DurationInput::NonNumeric,
    }
}

fn validation_message(reason: WorkoutValidationError) -> &'static str {
    match reason {
        WorkoutValidationError::EmptyName => "Workout name is required",
        WorkoutValidationError::EmptyDuration => "Duration is required",
        WorkoutValidationError::InvalidDuration => "Duration must be a valid number",
        WorkoutValidationError::NonPositiveDuration => "Duration must be positive",
        WorkoutValidationError::DurationTooLarge => "Duration is too large",
    }
}

fn api_error(error: WorkoutLogError) -> Error {
    match error {
        WorkoutLogError::Validation { reason } => {
            warn!(%reason, "rejected workout submitted over the API");
            Error::invalid_request(validation_message(reason))
        }
        other => Error::from(other),
    }
}

/// List every stored workout.
#[utoipa::path(
    get,
    path = "/api/workouts",
    responses(
        (status = 200, description = "All workouts in insertion order", body = WorkoutListResponse),
        (status = 500, description = "Storage failure", body = ErrorEnvelope)
    ),
    tags = ["workouts"],
    operation_id = "listWorkouts"
)]
#[get("/api/workouts")]
pub async fn list_workouts(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<WorkoutListResponse>> {
    let records = state.workouts.list_workouts().await.map_err(api_error)?;
    let workouts: Vec<WorkoutBody> = records.iter().map(WorkoutBody::from).collect();
    Ok(web::Json(WorkoutListResponse {
        success: true,
        total_count: workouts.len(),
        workouts,
    }))
}

/// Record a workout from a JSON body.
#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = AddWorkoutRequest,
    responses(
        (status = 201, description = "Workout recorded", body = WorkoutCreatedResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorEnvelope),
        (status = 500, description = "Storage failure", body = ErrorEnvelope)
    ),
    tags = ["workouts"],
    operation_id = "addWorkout"
)]
#[post("/api/workouts")]
pub async fn add_workout(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let input = ApiWorkoutInput::from_body(&body).map_err(|error| {
        warn!(%error, "workout body rejected");
        Error::invalid_request(NO_DATA_PROVIDED)
    })?;
    let record = state
        .workouts
        .add_workout(&input.name, input.duration)
        .await
        .map_err(api_error)?;
    Ok(HttpResponse::Created().json(WorkoutCreatedResponse {
        success: true,
        message: format!("{} added successfully!", record.name()),
        workout: WorkoutBody::from(&record),
    }))
}

/// Delete a workout by id.
#[utoipa::path(
    delete,
    path = "/api/workouts/{id}",
    params(("id" = u64, Path, description = "Workout identifier")),
    responses(
        (status = 200, description = "Workout deleted", body = WorkoutDeletedResponse),
        (status = 404, description = "No workout with that id", body = ErrorEnvelope),
        (status = 500, description = "Storage failure", body = ErrorEnvelope)
    ),
    tags = ["workouts"],
    operation_id = "deleteWorkout"
)]
#[delete("/api/workouts/{id:\\d+}")]
pub async fn delete_workout(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<WorkoutDeletedResponse>> {
    let id = WorkoutId::from_sequence(path.into_inner())
        .ok_or_else(|| Error::not_found("Workout not found"))?;
    let removed = state.workouts.delete_workout(id).await.map_err(api_error)?;
    Ok(web::Json(WorkoutDeletedResponse {
        success: true,
        message: format!("Workout '{}' deleted successfully!", removed.name()),
    }))
}

#[cfg(test)]
#[path = "workouts_tests.rs"]
mod tests;
