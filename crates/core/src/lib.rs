//! Domain layer for the convene booking backend.
//!
//! Framework-free: defines the domain model, the closed error taxonomy,
//! the storage port traits, and the booking decision logic. Persistence
//! adapters live in `convene-db`, the HTTP boundary in `convene-api`.

pub mod booking;
pub mod error;
pub mod model;
pub mod store;
pub mod types;
