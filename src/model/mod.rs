//! Data transfer objects shared by the HTTP surface.
//!
//! These types define the JSON contract of the API and carry `ToSchema` derives so they
//! appear in the generated OpenAPI document. Server-side domain models convert into
//! these at the controller boundary.

pub mod api;
pub mod drone;
pub mod medication;
