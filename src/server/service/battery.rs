//! Periodic battery refresh.
//!
//! `BatteryMonitor` reads a fresh level for every drone through a pluggable
//! `BatteryLevelReader`, appends it to the battery history, stores it on the drone and
//! then notifies its observers synchronously. Observers are registered when the monitor
//! is constructed at startup.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{battery_history::BatteryHistoryRepository, drone::DroneRepository},
    error::{drone::DroneError, AppError},
    model::{battery::BatteryHistoryEntry, drone::Drone},
    service::drone::lock::DroneLockRegistry,
};

/// Number of samples returned by the battery history endpoint.
pub const DEFAULT_HISTORY_LIMIT: u64 = 50;

/// Source of battery readings.
pub trait BatteryLevelReader: Send + Sync {
    /// Reads the current battery level for `drone`, in percent.
    fn read_level(&self, drone: &Drone) -> i32;
}

/// Reader returning a random level in `0..=100`; there is no hardware to ask.
#[derive(Default)]
pub struct SimulatedBatteryReader;

impl BatteryLevelReader for SimulatedBatteryReader {
    fn read_level(&self, _drone: &Drone) -> i32 {
        rand::rng().random_range(0..=100)
    }
}

/// Receives every refreshed drone after its new level is persisted.
pub trait BatteryObserver: Send + Sync {
    fn on_battery_update(&self, drone: &Drone);
}

/// Observer logging each refreshed level.
#[derive(Default)]
pub struct BatteryLogger;

impl BatteryObserver for BatteryLogger {
    fn on_battery_update(&self, drone: &Drone) {
        tracing::info!(
            "Drone {} battery level: {}%",
            drone.serial_number,
            drone.battery_capacity
        );
    }
}

#[derive(Clone)]
pub struct BatteryMonitor {
    reader: Arc<dyn BatteryLevelReader>,
    observers: Vec<Arc<dyn BatteryObserver>>,
}

impl BatteryMonitor {
    pub fn new(reader: Arc<dyn BatteryLevelReader>) -> Self {
        Self {
            reader,
            observers: Vec::new(),
        }
    }

    /// Registers an observer notified after each drone is refreshed.
    pub fn with_observer(mut self, observer: Arc<dyn BatteryObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Refreshes the battery level of every registered drone.
    ///
    /// Each drone is refreshed under its own lock and transaction. A failure for one
    /// drone is logged and does not stop the others.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of drones refreshed successfully
    /// - `Err(AppError)` - Failed to list drones
    pub async fn check_battery_levels(
        &self,
        db: &DatabaseConnection,
        locks: &DroneLockRegistry,
    ) -> Result<usize, AppError> {
        let drones = DroneRepository::new(db).get_all().await?;
        let mut refreshed = 0;

        for drone in drones {
            match self.refresh(db, locks, drone.id).await {
                Ok(updated) => {
                    for observer in &self.observers {
                        observer.on_battery_update(&updated);
                    }
                    refreshed += 1;
                }
                Err(e) => tracing::error!(
                    "Error checking battery level for drone {}: {}",
                    drone.serial_number,
                    e
                ),
            }
        }

        Ok(refreshed)
    }

    async fn refresh(
        &self,
        db: &DatabaseConnection,
        locks: &DroneLockRegistry,
        drone_id: i32,
    ) -> Result<Drone, AppError> {
        let _guard = locks.acquire(drone_id).await;
        let txn = db.begin().await?;

        let drone_repo = DroneRepository::new(&txn);
        let drone = drone_repo
            .find_by_id(drone_id)
            .await?
            .ok_or(DroneError::NotFound(drone_id))?;

        let level = self.reader.read_level(&drone).clamp(0, 100);

        BatteryHistoryRepository::new(&txn)
            .create(drone_id, level, Utc::now())
            .await?;
        let drone = drone_repo.update_battery(drone_id, level).await?;

        txn.commit().await?;

        Ok(drone)
    }
}

/// Read access to recorded battery samples.
pub struct BatteryHistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BatteryHistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most recent samples for a drone, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<BatteryHistoryEntry>)` - Up to `limit` samples
    /// - `Err(AppError::DroneErr(NotFound))` - Unknown drone
    pub async fn get_history(
        &self,
        drone_id: i32,
        limit: u64,
    ) -> Result<Vec<BatteryHistoryEntry>, AppError> {
        if DroneRepository::new(self.db)
            .find_by_id(drone_id)
            .await?
            .is_none()
        {
            return Err(DroneError::NotFound(drone_id).into());
        }

        Ok(BatteryHistoryRepository::new(self.db)
            .get_recent_by_drone(drone_id, limit)
            .await?)
    }
}
