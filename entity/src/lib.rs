//! SeaORM entity models for the drone dispatch database.

pub mod prelude;

pub mod drone;
pub mod drone_battery_history;
pub mod drone_medication;
pub mod medication;
