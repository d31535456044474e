//! Startup demo data.
//!
//! Seeds two drones and two medications, each medication loaded onto one drone through
//! the lifecycle service. Runs only against an empty drone table so restarts never
//! duplicate data; a medication whose code is already in the catalog is reused.

use sea_orm::DatabaseConnection;

use crate::{
    model::drone::{DroneModel, DroneState},
    server::{
        data::{drone::DroneRepository, medication::MedicationRepository},
        error::AppError,
        model::{drone::RegisterDroneParam, medication::CreateMedicationParam},
        service::{
            drone::{lock::DroneLockRegistry, DroneService},
            event::EventService,
            medication::MedicationService,
        },
    },
};

struct SeedEntry {
    serial_number: &'static str,
    model: DroneModel,
    weight_limit: i32,
    medication_name: &'static str,
    medication_weight: i32,
    medication_code: &'static str,
    image_url: &'static str,
}

const SEED_DATA: [SeedEntry; 2] = [
    SeedEntry {
        serial_number: "SN123456",
        model: DroneModel::Lightweight,
        weight_limit: 300,
        medication_name: "Med1",
        medication_weight: 100,
        medication_code: "MED1",
        image_url: "image1.jpg",
    },
    SeedEntry {
        serial_number: "SN123457",
        model: DroneModel::Middleweight,
        weight_limit: 400,
        medication_name: "Med2",
        medication_weight: 200,
        medication_code: "MED2",
        image_url: "image2.jpg",
    },
];

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a DroneLockRegistry,
    events: &'a EventService,
}

impl<'a> SeedService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        locks: &'a DroneLockRegistry,
        events: &'a EventService,
    ) -> Self {
        Self { db, locks, events }
    }

    /// Seeds demo data when no drone is registered yet.
    ///
    /// # Returns
    /// - `Ok(true)` - Data was seeded
    /// - `Ok(false)` - Drones already exist; nothing written
    /// - `Err(AppError)` - Seeding failed part way
    pub async fn seed_if_empty(&self) -> Result<bool, AppError> {
        if DroneRepository::new(self.db).count().await? > 0 {
            return Ok(false);
        }

        let drone_service = DroneService::new(self.db, self.locks, self.events);
        let medication_service = MedicationService::new(self.db);
        let catalog = MedicationRepository::new(self.db);

        for entry in SEED_DATA {
            let drone = drone_service
                .register(RegisterDroneParam {
                    serial_number: entry.serial_number.to_string(),
                    model: entry.model,
                    weight_limit: entry.weight_limit,
                    battery_capacity: 100,
                    state: Some(DroneState::Idle),
                })
                .await?;

            let medication = match catalog.find_by_code(entry.medication_code).await? {
                Some(existing) => existing,
                None => {
                    medication_service
                        .create(CreateMedicationParam {
                            name: entry.medication_name.to_string(),
                            weight: entry.medication_weight,
                            code: entry.medication_code.to_string(),
                            image_url: Some(entry.image_url.to_string()),
                        })
                        .await?
                }
            };

            drone_service
                .load_medication(drone.id, medication.id)
                .await?;
        }

        tracing::info!("Seeded {} drones with demo medications", SEED_DATA.len());

        Ok(true)
    }
}
