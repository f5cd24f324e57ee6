//! Booking decision logic.
//!
//! Every operation runs the same admission check (enrolled, ticket paid,
//! in-person, hotel included) before touching bookings; writes additionally
//! check room capacity. Checks and the following write are sequential reads
//! with no transaction across them, so capacity is enforced best-effort;
//! the one-booking-per-user rule is backstopped by a unique constraint in
//! the Postgres adapter.

use std::sync::Arc;

use crate::error::CoreError;
use crate::model::{Booking, BookingWithRoom, Room, TicketStatus};
use crate::store::{BookingStore, EligibilityStore, RoomStore};
use crate::types::DbId;

/// Orchestrates booking reads and writes against the storage ports.
///
/// Cheaply cloneable; production hands it Postgres-backed stores, tests
/// hand it in-memory ones.
#[derive(Clone)]
pub struct BookingService {
    rooms: Arc<dyn RoomStore>,
    bookings: Arc<dyn BookingStore>,
    eligibility: Arc<dyn EligibilityStore>,
}

impl BookingService {
    pub fn new(
        rooms: Arc<dyn RoomStore>,
        bookings: Arc<dyn BookingStore>,
        eligibility: Arc<dyn EligibilityStore>,
    ) -> Self {
        Self {
            rooms,
            bookings,
            eligibility,
        }
    }

    /// Return the caller's current booking together with its room.
    pub async fn current_booking(&self, user_id: DbId) -> Result<BookingWithRoom, CoreError> {
        self.ensure_eligible(user_id).await?;

        self.bookings
            .find_by_user(user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Booking",
                id: user_id,
            })
    }

    /// Reserve a room for the caller.
    ///
    /// Fails with [`CoreError::Forbidden`] if the caller already holds a
    /// booking, [`CoreError::NotFound`] if the room does not exist, and
    /// [`CoreError::RoomFull`] if it is at capacity.
    pub async fn book_room(&self, user_id: DbId, room_id: DbId) -> Result<Booking, CoreError> {
        self.ensure_eligible(user_id).await?;

        self.ensure_room_available(room_id).await?;

        if self.bookings.find_by_user(user_id).await?.is_some() {
            return Err(CoreError::Forbidden(
                "user already has an active booking".into(),
            ));
        }

        self.bookings.create(user_id, room_id).await
    }

    /// Move the caller's booking to another room.
    ///
    /// The caller must own the booking named by `booking_id`, and the
    /// target room must differ from the current one and have free capacity.
    pub async fn change_room(
        &self,
        user_id: DbId,
        booking_id: DbId,
        room_id: DbId,
    ) -> Result<Booking, CoreError> {
        self.ensure_eligible(user_id).await?;

        let booking = self
            .bookings
            .find_by_user(user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Booking",
                id: booking_id,
            })?;

        if booking.id != booking_id {
            return Err(CoreError::Unauthorized(
                "booking does not belong to this user".into(),
            ));
        }

        if booking.room.id == room_id {
            return Err(CoreError::Forbidden(
                "booking is already assigned to this room".into(),
            ));
        }

        self.ensure_room_available(room_id).await?;

        self.bookings.change_room(booking.id, room_id).await
    }

    /// Admission check shared by every operation.
    ///
    /// Each disqualifier fails with the same [`CoreError::Forbidden`] so a
    /// probing client cannot tell which condition it tripped.
    async fn ensure_eligible(&self, user_id: DbId) -> Result<(), CoreError> {
        let forbidden = || CoreError::Forbidden("booking is not permitted for this user".into());

        let enrollment = self
            .eligibility
            .find_enrollment_by_user(user_id)
            .await?
            .ok_or_else(forbidden)?;

        let ticket = self
            .eligibility
            .find_ticket_by_enrollment(enrollment.id)
            .await?
            .ok_or_else(forbidden)?;

        if ticket.status == TicketStatus::Reserved
            || ticket.ticket_type.is_remote
            || !ticket.ticket_type.includes_hotel
        {
            return Err(forbidden());
        }

        Ok(())
    }

    /// Resolve the room and verify its occupancy is below capacity.
    async fn ensure_room_available(&self, room_id: DbId) -> Result<Room, CoreError> {
        let room = self
            .rooms
            .find_room(room_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Room",
                id: room_id,
            })?;

        let occupied = self.rooms.count_bookings(room_id).await?;
        if occupied >= i64::from(room.capacity) {
            return Err(CoreError::RoomFull { room_id });
        }

        Ok(room)
    }
}
