//! Medication factory for creating test medication entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test medications with customizable fields.
///
/// Each medication gets a unique code so several can be created in one test.
pub struct MedicationFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::medication::Model,
}

impl<'a> MedicationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::medication::entity_builder()
            .name(format!("Medication-{}", id))
            .code(format!("MED_{}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.entity.weight = weight;
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.entity.code = code.into();
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.entity.image_url = Some(image_url.into());
        self
    }

    /// Builds and inserts the medication entity into the database.
    pub async fn build(self) -> Result<entity::medication::Model, DbErr> {
        entity::medication::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            weight: ActiveValue::Set(self.entity.weight),
            code: ActiveValue::Set(self.entity.code),
            image_url: ActiveValue::Set(self.entity.image_url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 100 g medication with a unique code.
pub async fn create_medication(
    db: &DatabaseConnection,
) -> Result<entity::medication::Model, DbErr> {
    MedicationFactory::new(db).build().await
}

/// Creates a medication with the given weight in grams.
pub async fn create_medication_with_weight(
    db: &DatabaseConnection,
    weight: i32,
) -> Result<entity::medication::Model, DbErr> {
    MedicationFactory::new(db).weight(weight).build().await
}
