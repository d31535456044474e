//! Loading record factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records a medication as loaded on a drone without touching the drone's state.
///
/// # Arguments
/// - `db` - Database connection
/// - `drone_id` - Existing drone ID
/// - `medication_id` - Existing medication ID
///
/// # Returns
/// - `Ok(entity::drone_medication::Model)` - Created loading record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_drone_medication(
    db: &DatabaseConnection,
    drone_id: i32,
    medication_id: i32,
) -> Result<entity::drone_medication::Model, DbErr> {
    entity::drone_medication::ActiveModel {
        id: ActiveValue::NotSet,
        drone_id: ActiveValue::Set(drone_id),
        medication_id: ActiveValue::Set(medication_id),
        loaded_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
