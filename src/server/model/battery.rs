//! Domain model for battery history samples.

use chrono::{DateTime, Utc};

use crate::model::drone::BatteryHistoryEntryDto;

/// A single battery reading recorded by the battery monitor.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryHistoryEntry {
    pub id: i32,
    pub drone_id: i32,
    pub battery_level: i32,
    pub recorded_at: DateTime<Utc>,
}

impl BatteryHistoryEntry {
    pub fn from_entity(entity: entity::drone_battery_history::Model) -> Self {
        Self {
            id: entity.id,
            drone_id: entity.drone_id,
            battery_level: entity.battery_level,
            recorded_at: entity.recorded_at,
        }
    }

    pub fn into_dto(self) -> BatteryHistoryEntryDto {
        BatteryHistoryEntryDto {
            battery_level: self.battery_level,
            recorded_at: self.recorded_at,
        }
    }
}
