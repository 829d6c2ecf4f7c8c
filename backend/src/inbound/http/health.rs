//! Health endpoints.
//!
//! `/health` reports service identity and the current workout count for
//! monitoring dashboards. `/health/ready` and `/health/live` are bare
//! orchestration probes driven by [`HealthState`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use chrono::SecondsFormat;
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// Fixed service name reported by `/health`.
pub const SERVICE_NAME: &str = "ACEest Fitness Tracker";

/// Readiness and liveness flags plus the clock used for health timestamps.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl Default for HealthState {
    fn default() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl HealthState {
    /// Not ready, alive, using the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Not ready, alive, reading time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            clock,
        }
    }

    /// Mark the service as ready once the listener is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the process as draining so liveness checks fail fast.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Body returned by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "ACEest Fitness Tracker")]
    pub service: String,
    /// Local time with offset, RFC 3339.
    #[schema(example = "2025-03-14T07:30:05.123456+00:00")]
    pub timestamp: String,
    pub total_workouts: usize,
}

/// Service status and current workout count.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthReport),
        (status = 500, description = "Storage failure", body = ErrorEnvelope)
    ),
    tags = ["health"]
)]
#[get("/health")]
pub async fn health(
    state: web::Data<HttpState>,
    health: web::Data<HealthState>,
) -> ApiResult<web::Json<HealthReport>> {
    let total_workouts = state.workouts.count().await?;
    Ok(web::Json(HealthReport {
        status: "healthy".to_owned(),
        service: SERVICE_NAME.to_owned(),
        timestamp: health
            .clock
            .local()
            .to_rfc3339_opts(SecondsFormat::Micros, false),
        total_workouts,
    }))
}

/// Readiness probe: `200` once the server is bound, `503` before.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    ),
    tags = ["health"]
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe: `200` while alive, `503` once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    ),
    tags = ["health"]
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}
