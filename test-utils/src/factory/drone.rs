//! Drone factory for creating test drone entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drones with customizable fields.
///
/// Defaults are sourced from `fixture::drone::entity()` with a unique serial number per
/// drone so several can coexist in one test.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::drone::DroneFactory;
///
/// let drone = DroneFactory::new(&db)
///     .model("HEAVYWEIGHT")
///     .weight_limit(500)
///     .build()
///     .await?;
/// ```
pub struct DroneFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::drone::Model,
}

impl<'a> DroneFactory<'a> {
    /// Creates a new DroneFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DroneFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::drone::entity_builder()
            .serial_number(format!("SN-{:06}", id))
            .build();

        Self { db, entity }
    }

    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.entity.serial_number = serial_number.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.entity.model = model.into();
        self
    }

    pub fn weight_limit(mut self, weight_limit: i32) -> Self {
        self.entity.weight_limit = weight_limit;
        self
    }

    pub fn battery_capacity(mut self, battery_capacity: i32) -> Self {
        self.entity.battery_capacity = battery_capacity;
        self
    }

    /// Sets the lifecycle state as its stored string.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.entity.state = state.into();
        self
    }

    /// Builds and inserts the drone entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::drone::Model)` - Created drone entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::drone::Model, DbErr> {
        entity::drone::ActiveModel {
            id: ActiveValue::NotSet,
            serial_number: ActiveValue::Set(self.entity.serial_number),
            model: ActiveValue::Set(self.entity.model),
            weight_limit: ActiveValue::Set(self.entity.weight_limit),
            battery_capacity: ActiveValue::Set(self.entity.battery_capacity),
            state: ActiveValue::Set(self.entity.state),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an IDLE lightweight drone with a full battery.
///
/// Shorthand for `DroneFactory::new(db).build().await`.
pub async fn create_drone(db: &DatabaseConnection) -> Result<entity::drone::Model, DbErr> {
    DroneFactory::new(db).build().await
}
