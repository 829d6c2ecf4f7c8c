//! HTTP mapping for domain errors.
//!
//! Purpose: keep [`Error`] transport agnostic while letting Actix handlers
//! return it directly. Every failure is rendered as the JSON envelope
//! `{"success": false, "error": "<message>"}` with a status chosen by its
//! [`ErrorCode`]. The trace identifier, when present, travels in the
//! `trace-id` header rather than the body.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::middleware::TRACE_ID_HEADER;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Failure envelope shared by every JSON endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false`.
    #[schema(example = false)]
    pub success: bool,
    /// Human-readable reason.
    #[schema(example = "Workout not found")]
    pub error: String,
}

impl From<&Error> for ErrorEnvelope {
    fn from(value: &Error) -> Self {
        Self {
            success: false,
            error: value.message().to_owned(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(message = %self.message(), trace_id = ?self.trace_id(), "request failed");
        }
        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorEnvelope::from(self))
    }
}
