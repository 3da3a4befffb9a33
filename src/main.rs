use std::sync::Arc;

use fixture_persistence_sqlite::events::SqliteEventRepository;
use fixture_server_app::build_application;
use fixture_teams_sportsdb::SportsDbTeamDirectory;
use log::info;

use crate::config::ServerConfig;

mod config;
mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().expect("Invalid configuration");
    logs::init_logger(&config.log).expect("Failed to initialize logger");

    let event_repo = Arc::new(
        SqliteEventRepository::connect(&config.database)
            .await
            .expect("Failed to open event database"),
    );
    let team_directory = Arc::new(
        SportsDbTeamDirectory::new(
            config.team_directory_url.clone(),
            config.team_lookup_timeout,
        )
        .expect("Failed to build team directory client"),
    );

    let app = Arc::new(build_application(event_repo, team_directory));

    info!("Starting application");

    if let Err(e) =
        fixture_server_api::http::run(app, &config.host, config.port, shutdown_signal()).await
    {
        log::error!("HTTP API failed: {}", e);
        std::process::exit(1);
    }
}
