//! Domain model for the drone/medication association ledger.

use chrono::{DateTime, Utc};

use crate::{
    model::{drone::LoadedWeightDto, medication::LoadingRecordDto},
    server::model::{drone::Drone, medication::Medication},
};

/// A medication loaded onto a drone.
///
/// `drone` reflects the drone after the load completed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingRecord {
    pub id: i32,
    pub drone: Drone,
    pub medication: Medication,
    pub loaded_at: DateTime<Utc>,
}

impl LoadingRecord {
    pub fn into_dto(self) -> LoadingRecordDto {
        LoadingRecordDto {
            id: self.id,
            drone: self.drone.into_dto(),
            medication: self.medication.into_dto(),
            loaded_at: self.loaded_at,
        }
    }
}

/// Ledger total for a drone alongside its limit.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedWeight {
    pub drone_id: i32,
    pub total_weight: i32,
    pub weight_limit: i32,
}

impl LoadedWeight {
    pub fn into_dto(self) -> LoadedWeightDto {
        LoadedWeightDto {
            drone_id: self.drone_id,
            total_weight: self.total_weight,
            weight_limit: self.weight_limit,
        }
    }
}
