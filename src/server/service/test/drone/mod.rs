use crate::{
    model::drone::{DroneModel, DroneState},
    server::{
        error::{drone::DroneError, medication::MedicationError, validation::ValidationError, AppError},
        model::drone::{MarkIdleOutcome, RegisterDroneParam},
        service::{
            drone::{lock::DroneLockRegistry, DroneService},
            event::{DroneEvent, EventService},
        },
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delivery;
mod load_medication;
mod return_to_base;
mod update_state;

/// Reads the persisted state of a drone straight from the table.
async fn stored_state(db: &sea_orm::DatabaseConnection, drone_id: i32) -> Result<String, DbErr> {
    Ok(entity::prelude::Drone::find_by_id(drone_id)
        .one(db)
        .await?
        .map(|drone| drone.state)
        .unwrap_or_default())
}
