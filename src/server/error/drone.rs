use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, drone::DroneState};

#[derive(Error, Debug, PartialEq)]
pub enum DroneError {
    /// No drone exists with the requested ID.
    ///
    /// Results in a 404 Not Found response.
    #[error("Drone {0} not found")]
    NotFound(i32),

    /// Another drone already uses the serial number.
    ///
    /// Results in a 409 Conflict response.
    #[error("A drone with serial number '{0}' already exists")]
    DuplicateSerialNumber(String),

    /// The drone is not in a state that accepts medication.
    ///
    /// Results in a 409 Conflict response.
    #[error("Drone {drone_id} is not available for loading while {state}")]
    NotAvailable { drone_id: i32, state: DroneState },

    /// The drone's battery is below the loading threshold.
    ///
    /// Results in a 409 Conflict response.
    #[error("Drone {drone_id} battery level {battery}% is below the {minimum}% required for loading")]
    BatteryTooLow {
        drone_id: i32,
        battery: i32,
        minimum: i32,
    },

    /// The medication would push the drone over its weight limit.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Loading {requested}g onto drone {drone_id} exceeds its {limit}g weight limit ({current}g already loaded)")]
    Overweight {
        drone_id: i32,
        current: i32,
        requested: i32,
        limit: i32,
    },

    /// The requested lifecycle transition is not a legal edge.
    ///
    /// Results in a 409 Conflict response.
    #[error("Drone {drone_id} cannot transition from {from} to {to}")]
    InvalidStateTransition {
        drone_id: i32,
        from: DroneState,
        to: DroneState,
    },
}

impl DroneError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Overweight { .. } => StatusCode::BAD_REQUEST,
            Self::DuplicateSerialNumber(_)
            | Self::NotAvailable { .. }
            | Self::BatteryTooLow { .. }
            | Self::InvalidStateTransition { .. } => StatusCode::CONFLICT,
        }
    }
}

/// Converts drone errors into HTTP responses.
///
/// Drone errors describe rejected requests rather than faults, so the error message is
/// returned to the client as-is.
///
/// # Returns
/// - 400 Bad Request - `Overweight`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - duplicates, unavailable drones, low battery, illegal transitions
impl IntoResponse for DroneError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
