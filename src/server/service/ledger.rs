//! Read side of the drone/medication association ledger.
//!
//! Answers what is loaded on a drone and how much it weighs. Both reads are recomputed
//! from persisted records and never write.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{drone::DroneRepository, drone_medication::DroneMedicationRepository},
    error::{drone::DroneError, AppError},
    model::{drone::Drone, loading::LoadedWeight, medication::Medication},
};

pub struct LedgerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists medications loaded on a drone in load order.
    ///
    /// # Returns
    /// - `Ok(Vec<Medication>)` - Loaded medications, empty if nothing is loaded
    /// - `Err(AppError::DroneErr(NotFound))` - Unknown drone
    pub async fn list_medications(&self, drone_id: i32) -> Result<Vec<Medication>, AppError> {
        self.require_drone(drone_id).await?;

        Ok(DroneMedicationRepository::new(self.db)
            .get_medications_by_drone(drone_id)
            .await?)
    }

    /// Ledger total for a drone together with its weight limit.
    pub async fn loaded_weight(&self, drone_id: i32) -> Result<LoadedWeight, AppError> {
        let drone = self.require_drone(drone_id).await?;
        let total_weight = DroneMedicationRepository::new(self.db)
            .total_weight(drone_id)
            .await?;

        Ok(LoadedWeight {
            drone_id,
            total_weight,
            weight_limit: drone.weight_limit,
        })
    }

    async fn require_drone(&self, drone_id: i32) -> Result<Drone, AppError> {
        DroneRepository::new(self.db)
            .find_by_id(drone_id)
            .await?
            .ok_or_else(|| DroneError::NotFound(drone_id).into())
    }
}
