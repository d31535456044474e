//! Request processing applied at the HTTP boundary.

pub mod bulkhead;
