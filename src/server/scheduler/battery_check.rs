use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{battery::BatteryMonitor, drone::lock::DroneLockRegistry},
};

/// Starts the battery check scheduler
///
/// Runs on `schedule` (six-field cron, every minute by default) and refreshes the
/// battery level of every registered drone. Refreshes take the same per-drone locks as
/// request handlers, so a reading never lands in the middle of a loading operation.
///
/// # Arguments
/// - `db`: Database connection
/// - `locks`: Lock registry shared with the request handlers
/// - `monitor`: Battery monitor with its reader and observers
/// - `schedule`: Cron expression for the job
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler; dropping it does not stop the job
/// - `Err(AppError::SchedulerErr)` - Invalid schedule or scheduler failed to start
pub async fn start_scheduler(
    db: DatabaseConnection,
    locks: DroneLockRegistry,
    monitor: BatteryMonitor,
    schedule: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let locks = locks.clone();
        let monitor = monitor.clone();

        Box::pin(async move {
            match monitor.check_battery_levels(&db, &locks).await {
                Ok(refreshed) => tracing::debug!("Refreshed battery level of {} drones", refreshed),
                Err(e) => tracing::error!("Error checking battery levels: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Battery check scheduler started ({})", schedule);

    Ok(scheduler)
}
