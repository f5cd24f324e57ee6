//! Repository layer.
//!
//! Each repository holds the connection pool and implements one of the
//! `convene-core` storage ports with hand-written SQL.

pub mod booking_repo;
pub mod eligibility_repo;
pub mod room_repo;

pub use booking_repo::BookingRepo;
pub use eligibility_repo::EligibilityRepo;
pub use room_repo::RoomRepo;

use convene_core::error::CoreError;

/// Map an adapter failure into the domain error taxonomy.
///
/// Details are logged here; the value carried upward is the sanitized
/// display form only.
pub(crate) fn storage_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Storage(err.to_string())
}
