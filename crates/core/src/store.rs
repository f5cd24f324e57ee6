//! Storage ports consumed by the booking service.
//!
//! One trait per data-access collaborator. Production wires the Postgres
//! repositories from `convene-db`; tests substitute in-memory stores.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::model::{Booking, BookingWithRoom, Enrollment, Room, Ticket};
use crate::types::DbId;

/// Read access to rooms and their current occupancy.
#[async_trait]
pub trait RoomStore: Send + Sync {
    async fn find_room(&self, room_id: DbId) -> Result<Option<Room>, CoreError>;

    /// Number of bookings currently referencing the room.
    async fn count_bookings(&self, room_id: DbId) -> Result<i64, CoreError>;
}

/// Read/write access to bookings.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// The user's current booking joined with its room, if any.
    async fn find_by_user(&self, user_id: DbId) -> Result<Option<BookingWithRoom>, CoreError>;

    async fn create(&self, user_id: DbId, room_id: DbId) -> Result<Booking, CoreError>;

    /// Move an existing booking to another room.
    async fn change_room(&self, booking_id: DbId, room_id: DbId) -> Result<Booking, CoreError>;
}

/// Read-only access to the upstream enrollment/ticket data used to decide
/// whether a user may book at all.
#[async_trait]
pub trait EligibilityStore: Send + Sync {
    async fn find_enrollment_by_user(
        &self,
        user_id: DbId,
    ) -> Result<Option<Enrollment>, CoreError>;

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: DbId,
    ) -> Result<Option<Ticket>, CoreError>;
}
