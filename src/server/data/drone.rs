//! Drone data repository for database operations.
//!
//! Provides the `DroneRepository` for registering drones and reading or updating their
//! lifecycle state and battery level. The repository is generic over the connection so
//! the lifecycle service can run several operations inside one transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::drone::DroneState,
    server::{
        error::{drone::DroneError, AppError},
        model::drone::{CreateDroneParam, Drone},
        util::db::is_unique_violation,
    },
};

/// Repository providing database operations for drone management.
pub struct DroneRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DroneRepository<'a, C> {
    /// Creates a new DroneRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `DroneRepository` - new repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new drone.
    ///
    /// # Arguments
    /// - `param` - Validated drone attributes
    ///
    /// # Returns
    /// - `Ok(Drone)` - The created drone
    /// - `Err(AppError::DroneErr(DuplicateSerialNumber))` - Serial number already in use
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateDroneParam) -> Result<Drone, AppError> {
        let serial_number = param.serial_number.clone();

        let entity = entity::drone::ActiveModel {
            serial_number: ActiveValue::Set(param.serial_number),
            model: ActiveValue::Set(param.model.as_str().to_string()),
            weight_limit: ActiveValue::Set(param.weight_limit),
            battery_capacity: ActiveValue::Set(param.battery_capacity),
            state: ActiveValue::Set(param.state.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::from(DroneError::DuplicateSerialNumber(serial_number))
            } else {
                AppError::from(err)
            }
        })?;

        Drone::from_entity(entity)
    }

    /// Finds a drone by ID
    ///
    /// # Returns
    /// - `Ok(Some(Drone))` - The drone if found
    /// - `Ok(None)` - No drone with that ID
    /// - `Err(AppError)` - Database error or unreadable stored values
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Drone>, AppError> {
        entity::prelude::Drone::find_by_id(id)
            .one(self.db)
            .await?
            .map(Drone::from_entity)
            .transpose()
    }

    /// Gets all drones currently in the given state, oldest registration first
    pub async fn get_by_state(&self, state: DroneState) -> Result<Vec<Drone>, AppError> {
        entity::prelude::Drone::find()
            .filter(entity::drone::Column::State.eq(state.as_str()))
            .order_by_asc(entity::drone::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Drone::from_entity)
            .collect()
    }

    /// Gets every registered drone ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Drone>, AppError> {
        entity::prelude::Drone::find()
            .order_by_asc(entity::drone::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Drone::from_entity)
            .collect()
    }

    /// Counts registered drones
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Drone::find().count(self.db).await
    }

    /// Persists a new lifecycle state for a drone.
    ///
    /// Does not check the transition; callers validate through `Drone::transition_to`.
    ///
    /// # Returns
    /// - `Ok(Drone)` - The updated drone
    /// - `Err(AppError::DbErr(RecordNotFound))` - No drone with that ID
    pub async fn update_state(&self, id: i32, state: DroneState) -> Result<Drone, AppError> {
        let mut active_model = self.find_active(id).await?;
        active_model.state = ActiveValue::Set(state.as_str().to_string());

        Drone::from_entity(active_model.update(self.db).await?)
    }

    /// Persists a new battery level for a drone.
    ///
    /// # Returns
    /// - `Ok(Drone)` - The updated drone
    /// - `Err(AppError::DbErr(RecordNotFound))` - No drone with that ID
    pub async fn update_battery(&self, id: i32, battery_capacity: i32) -> Result<Drone, AppError> {
        let mut active_model = self.find_active(id).await?;
        active_model.battery_capacity = ActiveValue::Set(battery_capacity);

        Drone::from_entity(active_model.update(self.db).await?)
    }

    async fn find_active(&self, id: i32) -> Result<entity::drone::ActiveModel, DbErr> {
        let drone = entity::prelude::Drone::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Drone {} not found", id)))?;

        Ok(drone.into())
    }
}
