use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::drone::DroneDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MedicationDto {
    pub id: i32,
    pub name: String,
    pub weight: i32,
    pub code: String,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateMedicationDto {
    pub name: String,
    pub weight: i32,
    pub code: String,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LoadMedicationDto {
    pub medication_id: i32,
}

/// A medication loaded onto a drone, with the drone's state after loading.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LoadingRecordDto {
    pub id: i32,
    pub drone: DroneDto,
    pub medication: MedicationDto,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub loaded_at: DateTime<Utc>,
}
