//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository is generic over `ConnectionTrait` so it can run against the pool or
//! inside a transaction.

pub mod battery_history;
pub mod drone;
pub mod drone_medication;
pub mod medication;
