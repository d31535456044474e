//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert into the database; defaults come from
//! the matching fixture module.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let drone = factory::drone::create_drone(&db).await?;
//!     let medication = factory::medication::create_medication(&db).await?;
//!
//!     // Create a loaded drone in one call
//!     let (drone, medication) = factory::helpers::create_loaded_drone(&db, 120).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let drone = factory::drone::DroneFactory::new(&db)
//!     .weight_limit(500)
//!     .battery_capacity(20)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `drone` - Create drone entities
//! - `medication` - Create medication entities
//! - `drone_medication` - Create loading records
//! - `battery_history` - Create battery samples
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod battery_history;
pub mod drone;
pub mod drone_medication;
pub mod helpers;
pub mod medication;

pub use battery_history::create_battery_sample;
pub use drone::create_drone;
pub use drone_medication::create_drone_medication;
pub use medication::{create_medication, create_medication_with_weight};
