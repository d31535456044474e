use sea_orm::DatabaseConnection;

use crate::server::{
    data::medication::MedicationRepository,
    error::{medication::MedicationError, AppError},
    model::medication::{CreateMedicationParam, Medication},
    service::drone::validation::validate_medication,
};

pub struct MedicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MedicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a medication to the catalog after validating its name, code and weight
    pub async fn create(&self, param: CreateMedicationParam) -> Result<Medication, AppError> {
        validate_medication(&param)?;

        let medication = MedicationRepository::new(self.db).create(param).await?;

        tracing::info!("Added medication {} to catalog", medication.code);

        Ok(medication)
    }

    /// Gets a medication by ID
    pub async fn get(&self, id: i32) -> Result<Medication, AppError> {
        MedicationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| MedicationError::NotFound(id).into())
    }
}
