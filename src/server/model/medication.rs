//! Domain models for the medication catalog.

use crate::model::medication::{CreateMedicationDto, MedicationDto};

/// A medication that can be loaded onto drones.
#[derive(Debug, Clone, PartialEq)]
pub struct Medication {
    pub id: i32,
    pub name: String,
    /// Weight in grams, always positive.
    pub weight: i32,
    pub code: String,
    pub image_url: Option<String>,
}

impl Medication {
    /// Converts an entity model to a medication domain model at the repository boundary.
    pub fn from_entity(entity: entity::medication::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            weight: entity.weight,
            code: entity.code,
            image_url: entity.image_url,
        }
    }

    pub fn into_dto(self) -> MedicationDto {
        MedicationDto {
            id: self.id,
            name: self.name,
            weight: self.weight,
            code: self.code,
            image_url: self.image_url,
        }
    }
}

/// Parameters for adding a medication to the catalog.
#[derive(Debug, Clone)]
pub struct CreateMedicationParam {
    pub name: String,
    pub weight: i32,
    pub code: String,
    pub image_url: Option<String>,
}

impl From<CreateMedicationDto> for CreateMedicationParam {
    fn from(dto: CreateMedicationDto) -> Self {
        Self {
            name: dto.name,
            weight: dto.weight,
            code: dto.code,
            image_url: dto.image_url,
        }
    }
}
