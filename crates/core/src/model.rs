//! Domain model for the booking slice.
//!
//! Enrollment, ticket, and hotel data are produced upstream (registration
//! and payment flows); this slice only reads them to decide whether a user
//! may hold a room booking.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// A bookable hotel room with a fixed occupant capacity.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: DbId,
    pub name: String,
    /// Maximum number of simultaneous bookings this room admits.
    pub capacity: i32,
    pub hotel_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A user's room reservation. Each user holds at most one.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub user_id: DbId,
    pub room_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Read model for a booking joined with its room, as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct BookingWithRoom {
    pub id: DbId,
    pub user_id: DbId,
    pub room: Room,
}

/// A user's event registration. Its existence is a precondition for any
/// booking operation.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
}

/// Payment state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Reserved,
    Paid,
}

/// Ticket category flags governing hotel entitlement.
#[derive(Debug, Clone)]
pub struct TicketType {
    pub id: DbId,
    pub name: String,
    pub price: i32,
    /// Remote attendance: no physical presence, no hotel.
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// A ticket bought for an enrollment, always read together with its type.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: DbId,
    pub enrollment_id: DbId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}
