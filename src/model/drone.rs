use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

/// Weight class of a drone.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DroneModel {
    Lightweight,
    Middleweight,
    Cruiserweight,
    Heavyweight,
}

impl DroneModel {
    /// Name used for persistence and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lightweight => "LIGHTWEIGHT",
            Self::Middleweight => "MIDDLEWEIGHT",
            Self::Cruiserweight => "CRUISERWEIGHT",
            Self::Heavyweight => "HEAVYWEIGHT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LIGHTWEIGHT" => Some(Self::Lightweight),
            "MIDDLEWEIGHT" => Some(Self::Middleweight),
            "CRUISERWEIGHT" => Some(Self::Cruiserweight),
            "HEAVYWEIGHT" => Some(Self::Heavyweight),
            _ => None,
        }
    }
}

impl fmt::Display for DroneModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a drone.
///
/// Legal transitions are enforced server-side; see `DroneState::can_transition_to`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DroneState {
    Idle,
    Loading,
    Loaded,
    Delivering,
    Delivered,
    Returning,
}

impl DroneState {
    pub const ALL: [DroneState; 6] = [
        Self::Idle,
        Self::Loading,
        Self::Loaded,
        Self::Delivering,
        Self::Delivered,
        Self::Returning,
    ];

    /// Name used for persistence and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Loading => "LOADING",
            Self::Loaded => "LOADED",
            Self::Delivering => "DELIVERING",
            Self::Delivered => "DELIVERED",
            Self::Returning => "RETURNING",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.as_str() == value)
    }
}

impl fmt::Display for DroneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DroneDto {
    pub id: i32,
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: i32,
    pub battery_capacity: i32,
    pub state: DroneState,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct RegisterDroneDto {
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: i32,
    pub battery_capacity: i32,
    /// Initial lifecycle state; registration is rejected when absent.
    pub state: Option<DroneState>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateDroneStateDto {
    pub state: DroneState,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BatteryLevelDto {
    pub drone_id: i32,
    pub battery_capacity: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LoadedWeightDto {
    pub drone_id: i32,
    pub total_weight: i32,
    pub weight_limit: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BatteryHistoryEntryDto {
    pub battery_level: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub recorded_at: DateTime<Utc>,
}

/// Query parameters for listing drones.
#[derive(Serialize, Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DroneStateQuery {
    /// State to filter by; defaults to `IDLE` (drones available for loading).
    pub state: Option<DroneState>,
}

/// Query parameters for the battery history endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BatteryHistoryQuery {
    /// Maximum samples to return, newest first (default: 50).
    pub limit: Option<u64>,
}

/// Query parameters for the delivery endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeliveryActionQuery {
    /// Either `start` or `complete`.
    pub action: String,
}
