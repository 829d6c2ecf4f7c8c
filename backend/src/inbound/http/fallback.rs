//! Catch-all responses for requests no handler claims.

use actix_web::error::InternalError;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

use super::render::{NOT_FOUND_BODY, SERVER_ERROR_BODY};

/// Default service: unknown paths and unsupported methods.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), path = %req.path(), "no route matched");
    not_found_page()
}

/// Plain `404` page.
#[must_use]
pub fn not_found_page() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(NOT_FOUND_BODY)
}

/// Plain `500` page.
#[must_use]
pub fn server_error_page() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type(ContentType::html())
        .body(SERVER_ERROR_BODY)
}

/// Path extraction settings: segments that match a route pattern but do not
/// fit the target type (an id beyond `u64`) answer with the `404` page.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|error, _req| InternalError::from_response(error, not_found_page()).into())
}
