//! Booking row models.

use convene_core::model::{Booking, BookingWithRoom, Room};
use convene_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full booking row from the `bookings` table.
#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub id: DbId,
    pub user_id: DbId,
    pub room_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            user_id: row.user_id,
            room_id: row.room_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Flattened booking-with-room join row. Room columns are aliased with a
/// `room_` prefix where they would collide with booking columns.
#[derive(Debug, Clone, FromRow)]
pub struct BookingWithRoomRow {
    pub id: DbId,
    pub user_id: DbId,
    pub room_id: DbId,
    pub room_name: String,
    pub capacity: i32,
    pub hotel_id: DbId,
    pub room_created_at: Timestamp,
    pub room_updated_at: Timestamp,
}

impl From<BookingWithRoomRow> for BookingWithRoom {
    fn from(row: BookingWithRoomRow) -> Self {
        BookingWithRoom {
            id: row.id,
            user_id: row.user_id,
            room: Room {
                id: row.room_id,
                name: row.room_name,
                capacity: row.capacity,
                hotel_id: row.hotel_id,
                created_at: row.room_created_at,
                updated_at: row.room_updated_at,
            },
        }
    }
}
