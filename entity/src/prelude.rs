pub use super::drone::Entity as Drone;
pub use super::drone_battery_history::Entity as DroneBatteryHistory;
pub use super::drone_medication::Entity as DroneMedication;
pub use super::medication::Entity as Medication;
