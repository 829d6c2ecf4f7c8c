//! Browser façade.
//!
//! ```text
//! GET  /             add form, pending flashes, recorded workouts
//! POST /add_workout  validate, flash the outcome, redirect to /
//! GET  /workouts     statistics and the full list
//! ```
//!
//! The form handler never renders a page itself. Every outcome, including
//! unexpected failures, becomes a flash message followed by a redirect.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::{error, warn};

use crate::domain::ports::WorkoutLogError;
use crate::domain::{DurationInput, WorkoutStats, WorkoutValidationError};
use crate::inbound::http::fallback::server_error_page;
use crate::inbound::http::flash::{FlashMessage, Flashes};
use crate::inbound::http::render::{render_index, render_workouts};
use crate::inbound::http::state::HttpState;

/// Fields posted by the add-workout form. Absent fields read as empty.
#[derive(Debug, Default, Deserialize)]
pub struct AddWorkoutForm {
    #[serde(default)]
    pub workout_name: String,
    #[serde(default)]
    pub duration: String,
}

fn form_message(reason: WorkoutValidationError) -> &'static str {
    match reason {
        WorkoutValidationError::EmptyName => "Workout name is required!",
        WorkoutValidationError::EmptyDuration => "Duration is required!",
        WorkoutValidationError::InvalidDuration => "Duration must be a valid number!",
        WorkoutValidationError::NonPositiveDuration => "Duration must be a positive number!",
        WorkoutValidationError::DurationTooLarge => "Duration is too large!",
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

fn take_flashes(flashes: &Flashes) -> Vec<FlashMessage> {
    flashes.take().unwrap_or_else(|err| {
        warn!(error = %err, "discarding unreadable flash messages");
        Vec::new()
    })
}

/// Landing page.
#[get("/")]
pub async fn index(state: web::Data<HttpState>, flashes: Flashes) -> HttpResponse {
    let pending = take_flashes(&flashes);
    match state.workouts.list_workouts().await {
        Ok(workouts) => html(render_index(&pending, &workouts)),
        Err(err) => {
            error!(error = %err, "failed to list workouts for index page");
            server_error_page()
        }
    }
}

/// Form submission target.
#[post("/add_workout")]
pub async fn add_workout(
    state: web::Data<HttpState>,
    flashes: Flashes,
    form: Option<web::Form<AddWorkoutForm>>,
) -> HttpResponse {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    let outcome = state
        .workouts
        .add_workout(&form.workout_name, DurationInput::from_text(&form.duration))
        .await;
    let flashed = match outcome {
        Ok(record) => flashes.success(format!("{} added successfully!", record.name())),
        Err(WorkoutLogError::Validation { reason }) => {
            warn!(%reason, "rejected workout submitted from the form");
            flashes.error(form_message(reason))
        }
        Err(err) => {
            error!(error = %err, "unexpected failure while adding workout");
            flashes.error(format!("An error occurred: {err}"))
        }
    };
    if let Err(err) = flashed {
        warn!(error = %err, "failed to queue flash message");
    }
    redirect_home()
}

/// Statistics page.
///
/// Totals are computed from the same snapshot as the list so the two always
/// agree.
#[get("/workouts")]
pub async fn view_workouts(state: web::Data<HttpState>) -> HttpResponse {
    match state.workouts.list_workouts().await {
        Ok(workouts) => {
            let stats = WorkoutStats::from_records(&workouts);
            html(render_workouts(&workouts, &stats))
        }
        Err(err) => {
            error!(error = %err, "failed to load workouts page");
            server_error_page()
        }
    }
}

#[cfg(test)]
#[path = "pages_tests.rs"]
mod tests;
