use std::sync::Arc;

use axum::{Router, routing::get};
use fixture_server_app::Application;
use log::info;

mod events;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

pub fn router(app: Arc<Application>) -> Router {
    // Older clients address the collection with a trailing slash.
    Router::new()
        .route(
            "/events",
            get(events::get_all_events).post(events::create_event),
        )
        .route(
            "/events/",
            get(events::get_all_events).post(events::create_event),
        )
        .route(
            "/events/{id}",
            get(events::get_event_by_id)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .with_state(AppState { app })
}

pub async fn run(
    app: Arc<Application>,
    host: &str,
    port: u16,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;

    info!("API server listening on {}:{}", host, port);
    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP API shut down gracefully");
    Ok(())
}
