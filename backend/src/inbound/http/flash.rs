//! One-shot feedback messages for the browser pages.
//!
//! Messages are queued in the cookie session under a single key and removed
//! as soon as a page reads them, so each one is shown exactly once.

use actix_session::Session;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::domain::Error;

pub(crate) const FLASH_KEY: &str = "_flashes";

/// Severity shown alongside a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Error,
    Success,
}

impl FlashLevel {
    /// CSS class suffix used when rendering.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// A queued message and its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

/// Session wrapper exposing the flash queue.
#[derive(Clone)]
pub struct Flashes(Session);

impl Flashes {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Queue `message` for the next page render.
    pub fn push(&self, level: FlashLevel, message: impl Into<String>) -> Result<(), Error> {
        let mut queued = self.queued()?;
        queued.push(FlashMessage {
            level,
            message: message.into(),
        });
        self.0
            .insert(FLASH_KEY, queued)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    pub fn error(&self, message: impl Into<String>) -> Result<(), Error> {
        self.push(FlashLevel::Error, message)
    }

    pub fn success(&self, message: impl Into<String>) -> Result<(), Error> {
        self.push(FlashLevel::Success, message)
    }

    /// Drain every queued message in the order it was pushed.
    pub fn take(&self) -> Result<Vec<FlashMessage>, Error> {
        let queued = self.queued()?;
        self.0.remove(FLASH_KEY);
        Ok(queued)
    }

    fn queued(&self) -> Result<Vec<FlashMessage>, Error> {
        self.0
            .get::<Vec<FlashMessage>>(FLASH_KEY)
            .map(Option::unwrap_or_default)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }
}

impl FromRequest for Flashes {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(Flashes::new) })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test, web};

    use super::*;
    use crate::inbound::http::test_utils::{SESSION_COOKIE, test_session_middleware};

    async fn push_two(flashes: Flashes) -> Result<HttpResponse, Error> {
        flashes.error("Duration is required!")?;
        flashes.success("Rowing added successfully!")?;
        Ok(HttpResponse::Ok().finish())
    }

    async fn take_all(flashes: Flashes) -> Result<HttpResponse, Error> {
        Ok(HttpResponse::Ok().json(flashes.take()?))
    }

    #[actix_web::test]
    async fn messages_are_read_once_in_push_order() {
        let app = actix_test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route("/push", web::get().to(push_two))
                .route("/take", web::get().to(take_all)),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/push").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let cookie: Cookie<'static> = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .expect("session cookie set")
            .into_owned();

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/take")
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        let cleared: Option<Cookie<'static>> = res
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(Cookie::into_owned);
        let taken: Vec<FlashMessage> = actix_test::read_body_json(res).await;
        assert_eq!(
            taken,
            vec![
                FlashMessage {
                    level: FlashLevel::Error,
                    message: "Duration is required!".to_owned(),
                },
                FlashMessage {
                    level: FlashLevel::Success,
                    message: "Rowing added successfully!".to_owned(),
                },
            ]
        );

        let next = cleared.unwrap_or(cookie);
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/take").cookie(next).to_request(),
        )
        .await;
        let taken: Vec<FlashMessage> = actix_test::read_body_json(res).await;
        assert!(taken.is_empty());
    }

    #[test]
    fn levels_serialise_lowercase() {
        let json = serde_json::to_string(&FlashMessage {
            level: FlashLevel::Success,
            message: "ok".to_owned(),
        })
        .expect("serialise flash");
        assert_eq!(json, r#"{"level":"success","message":"ok"}"#);
    }
}
