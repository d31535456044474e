//! Association ledger repository. Totals are recomputed from the records on every call.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::medication::Medication;

pub struct DroneMedicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DroneMedicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records that a medication has been loaded onto a drone.
    ///
    /// Performs no weight or state checks; the lifecycle service validates before
    /// calling this inside its transaction.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created association record
    /// - `Err(DbErr)` - Database error, including foreign key violations for unknown IDs
    pub async fn create(
        &self,
        drone_id: i32,
        medication_id: i32,
    ) -> Result<entity::drone_medication::Model, DbErr> {
        entity::drone_medication::ActiveModel {
            drone_id: ActiveValue::Set(drone_id),
            medication_id: ActiveValue::Set(medication_id),
            loaded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every medication loaded on a drone in load order.
    ///
    /// A medication loaded twice appears twice.
    pub async fn get_medications_by_drone(&self, drone_id: i32) -> Result<Vec<Medication>, DbErr> {
        let medications = entity::prelude::Medication::find()
            .inner_join(entity::prelude::DroneMedication)
            .filter(entity::drone_medication::Column::DroneId.eq(drone_id))
            .order_by_asc(entity::drone_medication::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Medication::from_entity)
            .collect();

        Ok(medications)
    }

    /// Sums the weight of all medications loaded on a drone.
    ///
    /// Saturates at `i32::MAX` instead of wrapping, which any weight limit rejects.
    ///
    /// # Returns
    /// - `Ok(0)` - Nothing loaded (or unknown drone)
    /// - `Ok(i32)` - Total weight in grams
    /// - `Err(DbErr)` - Database error
    pub async fn total_weight(&self, drone_id: i32) -> Result<i32, DbErr> {
        let weights: Vec<i32> = entity::prelude::Medication::find()
            .inner_join(entity::prelude::DroneMedication)
            .filter(entity::drone_medication::Column::DroneId.eq(drone_id))
            .select_only()
            .column(entity::medication::Column::Weight)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(weights
            .into_iter()
            .fold(0, |total: i32, weight| total.saturating_add(weight)))
    }
}
