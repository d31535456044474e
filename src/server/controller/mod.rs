//! HTTP request handlers.
//!
//! Controllers translate between DTOs and service calls. Read-only handlers go through
//! `with_read_retry`; mutating handlers call the service exactly once.

pub mod drone;
pub mod medication;

#[cfg(test)]
mod test;
