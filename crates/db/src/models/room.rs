//! Room row model.

use convene_core::model::Room;
use convene_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full room row from the `rooms` table.
#[derive(Debug, Clone, FromRow)]
pub struct RoomRow {
    pub id: DbId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room {
            id: row.id,
            name: row.name,
            capacity: row.capacity,
            hotel_id: row.hotel_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
