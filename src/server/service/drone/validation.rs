//! Loading eligibility and input validation rules. Nothing here touches storage.

use crate::server::{
    error::{drone::DroneError, validation::ValidationError},
    model::{
        drone::{CreateDroneParam, Drone, RegisterDroneParam},
        medication::{CreateMedicationParam, Medication},
    },
};

/// Minimum battery percentage required to accept medication.
pub const MIN_BATTERY_LEVEL: i32 = 25;

/// Upper bound for a drone's weight limit in grams.
pub const MAX_WEIGHT_LIMIT: i32 = 500;

/// Maximum serial number length in characters.
pub const MAX_SERIAL_LENGTH: usize = 100;

/// Decides whether `medication` may be loaded onto `drone`.
///
/// Checks run in a fixed order and the first failure is returned: battery, then
/// cumulative weight, then lifecycle state.
///
/// # Arguments
/// - `drone` - Drone as currently persisted
/// - `medication` - Medication to be loaded
/// - `current_total` - Weight in grams already loaded on the drone
///
/// # Returns
/// - `Ok(())` - Loading is allowed
/// - `Err(DroneError::BatteryTooLow)` - Battery below `MIN_BATTERY_LEVEL`
/// - `Err(DroneError::Overweight)` - Load would exceed the weight limit
/// - `Err(DroneError::NotAvailable)` - Drone is not `IDLE` or `LOADING`
pub fn validate_loading(
    drone: &Drone,
    medication: &Medication,
    current_total: i32,
) -> Result<(), DroneError> {
    if drone.battery_capacity < MIN_BATTERY_LEVEL {
        return Err(DroneError::BatteryTooLow {
            drone_id: drone.id,
            battery: drone.battery_capacity,
            minimum: MIN_BATTERY_LEVEL,
        });
    }

    let fits = current_total
        .checked_add(medication.weight)
        .is_some_and(|total| total <= drone.weight_limit);
    if !fits {
        return Err(DroneError::Overweight {
            drone_id: drone.id,
            current: current_total,
            requested: medication.weight,
            limit: drone.weight_limit,
        });
    }

    if !drone.state.is_loadable() {
        return Err(DroneError::NotAvailable {
            drone_id: drone.id,
            state: drone.state,
        });
    }

    Ok(())
}

/// Validates registration input and produces insertable parameters.
///
/// The serial number is stored exactly as given; only blank values are rejected.
pub fn validate_registration(
    param: RegisterDroneParam,
) -> Result<CreateDroneParam, ValidationError> {
    if param.serial_number.trim().is_empty() {
        return Err(ValidationError::BlankSerialNumber);
    }

    let length = param.serial_number.chars().count();
    if length > MAX_SERIAL_LENGTH {
        return Err(ValidationError::SerialNumberTooLong {
            length,
            max: MAX_SERIAL_LENGTH,
        });
    }

    if param.weight_limit <= 0 || param.weight_limit > MAX_WEIGHT_LIMIT {
        return Err(ValidationError::WeightLimitOutOfRange {
            value: param.weight_limit,
            max: MAX_WEIGHT_LIMIT,
        });
    }

    if !(0..=100).contains(&param.battery_capacity) {
        return Err(ValidationError::BatteryCapacityOutOfRange(
            param.battery_capacity,
        ));
    }

    let state = param.state.ok_or(ValidationError::MissingState)?;

    Ok(CreateDroneParam {
        serial_number: param.serial_number,
        model: param.model,
        weight_limit: param.weight_limit,
        battery_capacity: param.battery_capacity,
        state,
    })
}

/// Validates catalog input for a new medication.
///
/// Names allow letters, digits, `-` and `_`; codes allow uppercase letters, digits and
/// `_`. Both must be non-empty. No drone carries more than `MAX_WEIGHT_LIMIT`, so
/// heavier medications are refused here.
pub fn validate_medication(param: &CreateMedicationParam) -> Result<(), ValidationError> {
    let valid_name = !param.name.is_empty()
        && param
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_name {
        return Err(ValidationError::InvalidMedicationName(param.name.clone()));
    }

    let valid_code = !param.code.is_empty()
        && param
            .code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    if !valid_code {
        return Err(ValidationError::InvalidMedicationCode(param.code.clone()));
    }

    if param.weight <= 0 || param.weight > MAX_WEIGHT_LIMIT {
        return Err(ValidationError::MedicationWeightOutOfRange {
            value: param.weight,
            max: MAX_WEIGHT_LIMIT,
        });
    }

    Ok(())
}
