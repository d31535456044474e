//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the drone dispatch service: API
//! endpoints, the drone lifecycle, the loading ledger, battery monitoring and the
//! infrastructure around them. The backend uses Axum as the web framework and SeaORM
//! for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Lifecycle rules, validation, locking and events
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request bulkhead
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, drone locks, event publisher)
//! - **Startup** (`startup`) - Tracing, database, seed data and battery monitor setup
//! - **Router** (`router`) - Axum route configuration, API documentation and boundary layers
//! - **Scheduler** (`scheduler/`) - Cron job refreshing drone battery levels
//! - **Util** (`util/`) - Read retry and database error helpers
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request, applies CORS, tracing, timeout and bulkhead layers
//! 2. **Controller** converts DTOs to params, calls service (reads through the retry helper)
//! 3. **Service** takes the drone's lock, opens a transaction and validates the operation
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** commits, publishes events and returns the domain model
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
