use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        battery::{BatteryLogger, BatteryMonitor, SimulatedBatteryReader},
        seed::SeedService,
    },
    state::AppState,
};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds demo drones and medications into an empty database when enabled.
///
/// # Returns
/// - `Ok(())` - Seeding disabled, skipped or completed
/// - `Err(AppError)` - Seeding failed part way
pub async fn seed_data(config: &Config, state: &AppState) -> Result<(), AppError> {
    if !config.seed_data {
        return Ok(());
    }

    let seeded = SeedService::new(&state.db, &state.drone_locks, &state.events)
        .seed_if_empty()
        .await?;

    if !seeded {
        tracing::info!("Drones already registered, skipping seed data");
    }

    Ok(())
}

/// Builds the battery monitor used by the scheduler.
///
/// Readings are simulated and every refresh is logged.
pub fn setup_battery_monitor() -> BatteryMonitor {
    BatteryMonitor::new(Arc::new(SimulatedBatteryReader)).with_observer(Arc::new(BatteryLogger))
}
