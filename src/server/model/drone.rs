//! Domain models for drones and the drone lifecycle state machine.
//!
//! A drone moves through `IDLE → LOADING → LOADED → DELIVERING → DELIVERED →
//! RETURNING → IDLE`. The edges of that cycle are the only legal transitions; every
//! state change in the service layer goes through `Drone::transition_to` so an illegal
//! edge is rejected before anything is written.

use crate::{
    model::drone::{DroneDto, DroneModel, DroneState, RegisterDroneDto},
    server::error::{drone::DroneError, internal::InternalError, AppError},
};

impl DroneState {
    /// Whether `next` is a legal single-step transition from `self`.
    pub fn can_transition_to(self, next: DroneState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Loading)
                | (Self::Loading, Self::Loaded)
                | (Self::Loaded, Self::Delivering)
                | (Self::Delivering, Self::Delivered)
                | (Self::Delivered, Self::Returning)
                | (Self::Returning, Self::Idle)
        )
    }

    /// Whether this state is only reached as part of loading medication.
    pub fn is_entered_by_loading(self) -> bool {
        matches!(self, Self::Loading | Self::Loaded)
    }

    /// Whether a drone in this state may accept medication.
    pub fn is_loadable(self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }
}

/// A registered drone.
#[derive(Debug, Clone, PartialEq)]
pub struct Drone {
    pub id: i32,
    pub serial_number: String,
    pub model: DroneModel,
    /// Maximum total payload in grams, within `1..=500`.
    pub weight_limit: i32,
    /// Battery level in percent, within `0..=100`.
    pub battery_capacity: i32,
    pub state: DroneState,
}

impl Drone {
    /// Converts an entity model to a drone domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Drone)` - The converted drone domain model
    /// - `Err(AppError::InternalErr)` - Stored model or state is not a known value
    pub fn from_entity(entity: entity::drone::Model) -> Result<Self, AppError> {
        let model = DroneModel::parse(&entity.model).ok_or(InternalError::InvalidStoredValue {
            column: "drone.model",
            value: entity.model.clone(),
        })?;
        let state = DroneState::parse(&entity.state).ok_or(InternalError::InvalidStoredValue {
            column: "drone.state",
            value: entity.state.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            serial_number: entity.serial_number,
            model,
            weight_limit: entity.weight_limit,
            battery_capacity: entity.battery_capacity,
            state,
        })
    }

    /// Moves the drone to `next` if the lifecycle allows it.
    ///
    /// Leaves `self` untouched on failure.
    pub fn transition_to(&mut self, next: DroneState) -> Result<(), DroneError> {
        if !self.state.can_transition_to(next) {
            return Err(DroneError::InvalidStateTransition {
                drone_id: self.id,
                from: self.state,
                to: next,
            });
        }

        self.state = next;
        Ok(())
    }

    pub fn into_dto(self) -> DroneDto {
        DroneDto {
            id: self.id,
            serial_number: self.serial_number,
            model: self.model,
            weight_limit: self.weight_limit,
            battery_capacity: self.battery_capacity,
            state: self.state,
        }
    }
}

/// Parameters for registering a new drone.
#[derive(Debug, Clone)]
pub struct RegisterDroneParam {
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: i32,
    pub battery_capacity: i32,
    /// Initial state; `None` fails validation.
    pub state: Option<DroneState>,
}

impl From<RegisterDroneDto> for RegisterDroneParam {
    fn from(dto: RegisterDroneDto) -> Self {
        Self {
            serial_number: dto.serial_number,
            model: dto.model,
            weight_limit: dto.weight_limit,
            battery_capacity: dto.battery_capacity,
            state: dto.state,
        }
    }
}

/// Validated drone attributes ready for insertion.
#[derive(Debug, Clone)]
pub struct CreateDroneParam {
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: i32,
    pub battery_capacity: i32,
    pub state: DroneState,
}

/// Result of asking a returning drone to become idle.
///
/// `mark_idle` reports a wrong starting state or an unknown drone as outcomes rather
/// than errors so callers can answer with 409 / 404 without treating them as faults.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkIdleOutcome {
    /// The drone was `RETURNING` and is now `IDLE`.
    Idle(Drone),
    /// The drone exists but is in another state; nothing was written.
    Conflict(DroneState),
    /// No drone with the given ID.
    NotFound,
}
