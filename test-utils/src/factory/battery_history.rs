//! Battery sample factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a battery sample for a drone at the given time.
pub async fn create_battery_sample(
    db: &DatabaseConnection,
    drone_id: i32,
    battery_level: i32,
    recorded_at: DateTime<Utc>,
) -> Result<entity::drone_battery_history::Model, DbErr> {
    entity::drone_battery_history::ActiveModel {
        id: ActiveValue::NotSet,
        drone_id: ActiveValue::Set(drone_id),
        battery_level: ActiveValue::Set(battery_level),
        recorded_at: ActiveValue::Set(recorded_at),
    }
    .insert(db)
    .await
}
