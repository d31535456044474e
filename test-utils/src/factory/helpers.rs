//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique serial numbers and codes in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a LOADED drone carrying a single medication of the given weight.
///
/// This is a convenience method that creates:
/// 1. Drone in state `LOADED`
/// 2. Medication with the given weight
/// 3. Loading record linking the two
///
/// # Arguments
/// - `db` - Database connection
/// - `weight` - Medication weight in grams
///
/// # Returns
/// - `Ok((drone, medication))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_loaded_drone(
    db: &DatabaseConnection,
    weight: i32,
) -> Result<(entity::drone::Model, entity::medication::Model), DbErr> {
    let drone = crate::factory::drone::DroneFactory::new(db)
        .state("LOADED")
        .build()
        .await?;
    let medication = crate::factory::medication::create_medication_with_weight(db, weight).await?;
    crate::factory::drone_medication::create_drone_medication(db, drone.id, medication.id).await?;

    Ok((drone, medication))
}
