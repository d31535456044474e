//! Drone lifecycle service.
//!
//! Owns every state change a drone goes through. Each mutating operation follows the
//! same shape: take the drone's lock, open a transaction, read the drone, validate,
//! write, commit, then publish events. A failure at any step drops the transaction, so
//! nothing it wrote is kept.

pub mod lock;
pub mod validation;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::drone::DroneState,
    server::{
        data::{
            drone::DroneRepository, drone_medication::DroneMedicationRepository,
            medication::MedicationRepository,
        },
        error::{drone::DroneError, medication::MedicationError, AppError},
        model::{
            drone::{Drone, MarkIdleOutcome, RegisterDroneParam},
            loading::LoadingRecord,
        },
        service::{
            drone::{
                lock::DroneLockRegistry,
                validation::{validate_loading, validate_registration},
            },
            event::{DroneEvent, EventService},
        },
    },
};

pub struct DroneService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a DroneLockRegistry,
    events: &'a EventService,
}

impl<'a> DroneService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        locks: &'a DroneLockRegistry,
        events: &'a EventService,
    ) -> Self {
        Self { db, locks, events }
    }

    /// Registers a new drone.
    ///
    /// # Arguments
    /// - `param` - Registration input, validated here
    ///
    /// # Returns
    /// - `Ok(Drone)` - The registered drone
    /// - `Err(AppError::ValidationErr)` - Input breaks a registration rule
    /// - `Err(AppError::DroneErr(DuplicateSerialNumber))` - Serial number already registered
    pub async fn register(&self, param: RegisterDroneParam) -> Result<Drone, AppError> {
        let param = validate_registration(param)?;

        let drone = DroneRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Registered drone {} ({}) as {}",
            drone.id,
            drone.serial_number,
            drone.state
        );

        self.events.publish(DroneEvent::DroneRegistered {
            drone_id: drone.id,
            serial_number: drone.serial_number.clone(),
            model: drone.model,
            weight_limit: drone.weight_limit,
            battery_capacity: drone.battery_capacity,
            state: drone.state,
        });

        Ok(drone)
    }

    /// Loads a medication onto a drone.
    ///
    /// Validates battery, cumulative weight and state against the ledger, then moves the
    /// drone `IDLE → LOADING` (skipped when already `LOADING`), records the load and
    /// moves it to `LOADED`. The whole sequence runs in one transaction under the
    /// drone's lock.
    ///
    /// # Returns
    /// - `Ok(LoadingRecord)` - The persisted record with the drone's post-load state
    /// - `Err(AppError::DroneErr(NotFound))` / `Err(AppError::MedicationErr(NotFound))`
    /// - `Err(AppError::DroneErr(_))` - Battery, weight or state rejection; nothing written
    pub async fn load_medication(
        &self,
        drone_id: i32,
        medication_id: i32,
    ) -> Result<LoadingRecord, AppError> {
        let _guard = self.locks.acquire(drone_id).await;
        let txn = self.db.begin().await?;

        let drone_repo = DroneRepository::new(&txn);
        let ledger = DroneMedicationRepository::new(&txn);

        let mut drone = drone_repo
            .find_by_id(drone_id)
            .await?
            .ok_or(DroneError::NotFound(drone_id))?;
        let medication = MedicationRepository::new(&txn)
            .find_by_id(medication_id)
            .await?
            .ok_or(MedicationError::NotFound(medication_id))?;

        let current_total = ledger.total_weight(drone_id).await?;
        validate_loading(&drone, &medication, current_total)?;

        let mut transitions = Vec::with_capacity(2);
        if drone.state == DroneState::Idle {
            transitions.push((drone.state, DroneState::Loading));
            drone.transition_to(DroneState::Loading)?;
            drone_repo.update_state(drone_id, DroneState::Loading).await?;
        }

        let record = ledger.create(drone_id, medication_id).await?;

        transitions.push((drone.state, DroneState::Loaded));
        drone.transition_to(DroneState::Loaded)?;
        let drone = drone_repo.update_state(drone_id, DroneState::Loaded).await?;

        txn.commit().await?;

        let total_weight = current_total + medication.weight;
        tracing::info!(
            "Loaded medication {} onto drone {} ({}g / {}g)",
            medication.code,
            drone_id,
            total_weight,
            drone.weight_limit
        );

        self.publish_transitions(drone_id, &transitions);
        self.events.publish(DroneEvent::MedicationLoaded {
            drone_id,
            medication_id,
            total_weight,
        });

        Ok(LoadingRecord {
            id: record.id,
            drone,
            medication,
            loaded_at: record.loaded_at,
        })
    }

    /// Moves a `LOADED` drone to `DELIVERING`.
    pub async fn start_delivery(&self, drone_id: i32) -> Result<Drone, AppError> {
        self.advance(drone_id, &[DroneState::Delivering]).await
    }

    /// Moves a `DELIVERING` drone to `DELIVERED`.
    pub async fn complete_delivery(&self, drone_id: i32) -> Result<Drone, AppError> {
        self.advance(drone_id, &[DroneState::Delivered]).await
    }

    /// Brings a `DELIVERED` drone back to base.
    ///
    /// Passes through `RETURNING` and ends `IDLE` in one operation; from any other state
    /// nothing changes.
    pub async fn return_to_base(&self, drone_id: i32) -> Result<Drone, AppError> {
        self.advance(drone_id, &[DroneState::Returning, DroneState::Idle])
            .await
    }

    /// Applies a single explicit lifecycle transition.
    ///
    /// `LOADING` and `LOADED` are only entered through `load_medication`, so a drone
    /// cannot be marked loaded without a loading record.
    ///
    /// # Returns
    /// - `Ok(Drone)` - The drone in its new state
    /// - `Err(AppError::DroneErr(InvalidStateTransition))` - `target` is not the next
    ///   state, or is one of the loading states
    pub async fn update_state(&self, drone_id: i32, target: DroneState) -> Result<Drone, AppError> {
        if target.is_entered_by_loading() {
            let drone = self.get_drone(drone_id).await?;
            return Err(DroneError::InvalidStateTransition {
                drone_id,
                from: drone.state,
                to: target,
            }
            .into());
        }

        self.advance(drone_id, &[target]).await
    }

    /// Marks a `RETURNING` drone as `IDLE`.
    ///
    /// A drone in any other state, or an unknown drone, is reported through the outcome
    /// instead of an error and nothing is written.
    pub async fn mark_idle(&self, drone_id: i32) -> Result<MarkIdleOutcome, AppError> {
        let _guard = self.locks.acquire(drone_id).await;
        let txn = self.db.begin().await?;
        let drone_repo = DroneRepository::new(&txn);

        let Some(mut drone) = drone_repo.find_by_id(drone_id).await? else {
            return Ok(MarkIdleOutcome::NotFound);
        };

        if drone.state != DroneState::Returning {
            return Ok(MarkIdleOutcome::Conflict(drone.state));
        }

        drone.transition_to(DroneState::Idle)?;
        let drone = drone_repo.update_state(drone_id, DroneState::Idle).await?;
        txn.commit().await?;

        self.publish_transitions(drone_id, &[(DroneState::Returning, DroneState::Idle)]);

        Ok(MarkIdleOutcome::Idle(drone))
    }

    /// Gets a drone by ID
    pub async fn get_drone(&self, drone_id: i32) -> Result<Drone, AppError> {
        DroneRepository::new(self.db)
            .find_by_id(drone_id)
            .await?
            .ok_or_else(|| DroneError::NotFound(drone_id).into())
    }

    /// Lists drones in `state`, defaulting to `IDLE` (available for loading).
    pub async fn list_drones(&self, state: Option<DroneState>) -> Result<Vec<Drone>, AppError> {
        DroneRepository::new(self.db)
            .get_by_state(state.unwrap_or(DroneState::Idle))
            .await
    }

    /// Reads a drone's current battery level without side effects.
    pub async fn check_battery_level(&self, drone_id: i32) -> Result<i32, AppError> {
        Ok(self.get_drone(drone_id).await?.battery_capacity)
    }

    /// Walks a drone through `path`, one legal edge per step, in one transaction.
    ///
    /// The first illegal edge aborts the whole walk and leaves the stored state as it was.
    async fn advance(&self, drone_id: i32, path: &[DroneState]) -> Result<Drone, AppError> {
        let _guard = self.locks.acquire(drone_id).await;
        let txn = self.db.begin().await?;
        let drone_repo = DroneRepository::new(&txn);

        let mut drone = drone_repo
            .find_by_id(drone_id)
            .await?
            .ok_or(DroneError::NotFound(drone_id))?;

        let mut transitions = Vec::with_capacity(path.len());
        for &next in path {
            transitions.push((drone.state, next));
            drone.transition_to(next)?;
            drone = drone_repo.update_state(drone_id, next).await?;
        }

        txn.commit().await?;

        self.publish_transitions(drone_id, &transitions);

        Ok(drone)
    }

    fn publish_transitions(&self, drone_id: i32, transitions: &[(DroneState, DroneState)]) {
        for &(from, to) in transitions {
            tracing::debug!("Drone {} transitioned {} -> {}", drone_id, from, to);
            self.events
                .publish(DroneEvent::StateChanged { drone_id, from, to });
        }
    }
}
