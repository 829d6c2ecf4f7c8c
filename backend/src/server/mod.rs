//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use fitness_tracker::Trace;
#[cfg(debug_assertions)]
use fitness_tracker::doc::ApiDoc;
use fitness_tracker::inbound::http::configure;
use fitness_tracker::inbound::http::health::HealthState;
use fitness_tracker::inbound::http::session_config::SessionSettings;
use fitness_tracker::inbound::http::state::HttpState;
use fitness_tracker::outbound::memory::InMemoryWorkoutStore;
use mockable::DefaultClock;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    session: SessionSettings,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        session,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(session.middleware())
        .wrap(Trace);

    // Swagger UI registers before the catch-all so `/docs` is reachable.
    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app.configure(configure)
}

/// Bind the listener and start serving.
///
/// The workout store is created here, so its contents live exactly as long
/// as the returned [`Server`].
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
    session: SessionSettings,
) -> std::io::Result<Server> {
    let store = Arc::new(InMemoryWorkoutStore::new(Arc::new(DefaultClock)));
    let http_state = web::Data::new(HttpState::new(store));
    let server_health_state = health_state.clone();

    let bind_addr = settings.bind_addr();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            session: session.clone(),
        })
    })
    .bind(bind_addr.clone())?
    .run();

    info!(host = %bind_addr.0, port = bind_addr.1, "listening");
    health_state.mark_ready();
    Ok(server)
}
