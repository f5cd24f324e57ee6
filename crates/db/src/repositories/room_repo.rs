//! Repository for the `rooms` table.

use async_trait::async_trait;
use convene_core::error::CoreError;
use convene_core::model::Room;
use convene_core::store::RoomStore;
use convene_core::types::DbId;

use crate::models::room::RoomRow;
use crate::repositories::storage_error;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, capacity, hotel_id, created_at, updated_at";

/// Read access to rooms and their occupancy.
pub struct RoomRepo {
    pool: DbPool,
}

impl RoomRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomStore for RoomRepo {
    async fn find_room(&self, room_id: DbId) -> Result<Option<Room>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        let row = sqlx::query_as::<_, RoomRow>(&query)
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(row.map(Room::from))
    }

    async fn count_bookings(&self, room_id: DbId) -> Result<i64, CoreError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE room_id = $1")
            .bind(room_id)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)
    }
}
