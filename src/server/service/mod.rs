//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing the lifecycle and loading rules
//! - **Orchestration**: Coordinating multiple repository calls inside one transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Events**: Publishing domain events once a change is committed

pub mod battery;
pub mod drone;
pub mod event;
pub mod ledger;
pub mod medication;
pub mod seed;

#[cfg(test)]
mod test;
