//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let drone = fixture::drone::entity();
//!
//! // Create with custom fields
//! let loaded = fixture::drone::entity_builder()
//!     .state("LOADED")
//!     .build();
//! ```

pub mod drone;
pub mod medication;

pub use drone::{entity as drone_entity, entity_builder as drone_entity_builder};
pub use medication::{entity as medication_entity, entity_builder as medication_entity_builder};
