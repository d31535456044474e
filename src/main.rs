mod model;
mod server;

use std::{net::SocketAddr, time::Duration};

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::AppError,
    router::{self, BoundaryLimits, RateLimit},
    scheduler::battery_check,
    service::{drone::lock::DroneLockRegistry, event::EventService},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, DroneLockRegistry::new(), EventService::new());

    let _event_logger = state.events.spawn_logger();

    startup::seed_data(&config, &state).await?;

    let _scheduler = battery_check::start_scheduler(
        state.db.clone(),
        state.drone_locks.clone(),
        startup::setup_battery_monitor(),
        &config.battery_check_schedule,
    )
    .await?;

    let app = router::router(
        state,
        BoundaryLimits {
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            max_concurrent_requests: config.max_concurrent_requests,
            rate_limit: RateLimit::from_config(
                config.rate_limit_replenish_ms,
                config.rate_limit_burst,
            ),
        },
    );

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
