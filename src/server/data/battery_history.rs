//! Battery history repository.
//!
//! Append-only storage of battery samples written by the battery monitor.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::battery::BatteryHistoryEntry;

pub struct BatteryHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BatteryHistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a battery sample for a drone.
    pub async fn create(
        &self,
        drone_id: i32,
        battery_level: i32,
        recorded_at: DateTime<Utc>,
    ) -> Result<BatteryHistoryEntry, DbErr> {
        let entity = entity::drone_battery_history::ActiveModel {
            drone_id: ActiveValue::Set(drone_id),
            battery_level: ActiveValue::Set(battery_level),
            recorded_at: ActiveValue::Set(recorded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BatteryHistoryEntry::from_entity(entity))
    }

    /// Gets the most recent samples for a drone, newest first.
    ///
    /// # Arguments
    /// - `drone_id` - Drone to read history for
    /// - `limit` - Maximum number of samples to return
    pub async fn get_recent_by_drone(
        &self,
        drone_id: i32,
        limit: u64,
    ) -> Result<Vec<BatteryHistoryEntry>, DbErr> {
        let entries = entity::prelude::DroneBatteryHistory::find()
            .filter(entity::drone_battery_history::Column::DroneId.eq(drone_id))
            .order_by_desc(entity::drone_battery_history::Column::RecordedAt)
            .order_by_desc(entity::drone_battery_history::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(BatteryHistoryEntry::from_entity)
            .collect();

        Ok(entries)
    }
}
