//! Medication data repository for database operations.
//!
//! Provides the `MedicationRepository` for adding medications to the catalog and looking
//! them up by ID or code.

use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::{
    error::{medication::MedicationError, AppError},
    model::medication::{CreateMedicationParam, Medication},
    util::db::is_unique_violation,
};

/// Repository providing database operations for the medication catalog.
pub struct MedicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MedicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new medication.
    ///
    /// # Arguments
    /// - `param` - Validated medication attributes
    ///
    /// # Returns
    /// - `Ok(Medication)` - The created medication
    /// - `Err(AppError::MedicationErr(DuplicateCode))` - Code already in use
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMedicationParam) -> Result<Medication, AppError> {
        let code = param.code.clone();

        let entity = entity::medication::ActiveModel {
            name: ActiveValue::Set(param.name),
            weight: ActiveValue::Set(param.weight),
            code: ActiveValue::Set(param.code),
            image_url: ActiveValue::Set(param.image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::from(MedicationError::DuplicateCode(code))
            } else {
                AppError::from(err)
            }
        })?;

        Ok(Medication::from_entity(entity))
    }

    /// Finds a medication by ID
    ///
    /// # Returns
    /// - `Ok(Some(Medication))` - The medication if found
    /// - `Ok(None)` - No medication with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Medication>, DbErr> {
        let entity = entity::prelude::Medication::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Medication::from_entity))
    }

    /// Finds a medication by its unique code
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Medication>, DbErr> {
        let entity = entity::prelude::Medication::find()
            .filter(entity::medication::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Medication::from_entity))
    }
}
