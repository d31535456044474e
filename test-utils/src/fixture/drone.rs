//! Drone fixtures for creating in-memory test data.

use entity::drone;

/// Default test drone serial number.
pub const DEFAULT_SERIAL_NUMBER: &str = "SN-TEST-0001";

/// Default drone weight class.
pub const DEFAULT_MODEL: &str = "LIGHTWEIGHT";

/// Default weight limit in grams.
pub const DEFAULT_WEIGHT_LIMIT: i32 = 300;

/// Default battery percentage.
pub const DEFAULT_BATTERY_CAPACITY: i32 = 100;

/// Default lifecycle state.
pub const DEFAULT_STATE: &str = "IDLE";

/// Creates a drone entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - serial_number: `"SN-TEST-0001"`
/// - model: `"LIGHTWEIGHT"`
/// - weight_limit: `300`
/// - battery_capacity: `100`
/// - state: `"IDLE"`
///
/// # Returns
/// - `drone::Model` - In-memory drone entity
pub fn entity() -> drone::Model {
    entity_builder().build()
}

/// Creates a drone entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let drone = fixture::drone::entity_builder()
///     .battery_capacity(20)
///     .build();
/// ```
pub fn entity_builder() -> DroneEntityBuilder {
    DroneEntityBuilder::default()
}

/// Builder for creating customized drone entity models.
pub struct DroneEntityBuilder {
    id: i32,
    serial_number: String,
    model: String,
    weight_limit: i32,
    battery_capacity: i32,
    state: String,
}

impl Default for DroneEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            serial_number: DEFAULT_SERIAL_NUMBER.to_string(),
            model: DEFAULT_MODEL.to_string(),
            weight_limit: DEFAULT_WEIGHT_LIMIT,
            battery_capacity: DEFAULT_BATTERY_CAPACITY,
            state: DEFAULT_STATE.to_string(),
        }
    }
}

impl DroneEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = serial_number.into();
        self
    }

    /// Sets the weight class as its stored string, e.g. `"HEAVYWEIGHT"`.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn weight_limit(mut self, weight_limit: i32) -> Self {
        self.weight_limit = weight_limit;
        self
    }

    pub fn battery_capacity(mut self, battery_capacity: i32) -> Self {
        self.battery_capacity = battery_capacity;
        self
    }

    /// Sets the lifecycle state as its stored string, e.g. `"LOADED"`.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Builds the drone entity model.
    ///
    /// # Returns
    /// - `drone::Model` - In-memory drone entity with configured values
    pub fn build(self) -> drone::Model {
        drone::Model {
            id: self.id,
            serial_number: self.serial_number,
            model: self.model,
            weight_limit: self.weight_limit,
            battery_capacity: self.battery_capacity,
            state: self.state,
        }
    }
}
