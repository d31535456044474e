//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Per-drone lock registry serialising lifecycle operations
//! - Event publisher for the `drone-events` topic

use sea_orm::DatabaseConnection;

use crate::server::service::{drone::lock::DroneLockRegistry, event::EventService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `DroneLockRegistry` shares its lock map through an `Arc`
/// - `EventService` wraps a broadcast sender
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Locks shared by request handlers and the battery scheduler.
    ///
    /// Must be the same registry everywhere a drone is mutated, otherwise the
    /// per-drone serialisation does not hold.
    pub drone_locks: DroneLockRegistry,

    /// Publisher for domain events.
    pub events: EventService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `drone_locks` - Shared per-drone lock registry
    /// - `events` - Domain event publisher
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, drone_locks: DroneLockRegistry, events: EventService) -> Self {
        Self {
            db,
            drone_locks,
            events,
        }
    }
}
