//! Small helpers shared across layers.

pub mod db;
pub mod retry;
