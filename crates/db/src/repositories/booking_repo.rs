//! Repository for the `bookings` table.

use async_trait::async_trait;
use convene_core::error::CoreError;
use convene_core::model::{Booking, BookingWithRoom};
use convene_core::store::BookingStore;
use convene_core::types::DbId;

use crate::models::booking::{BookingRow, BookingWithRoomRow};
use crate::repositories::storage_error;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, room_id, created_at, updated_at";

/// Read/write access to bookings.
pub struct BookingRepo {
    pool: DbPool,
}

impl BookingRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for BookingRepo {
    async fn find_by_user(&self, user_id: DbId) -> Result<Option<BookingWithRoom>, CoreError> {
        let row = sqlx::query_as::<_, BookingWithRoomRow>(
            "SELECT b.id, b.user_id, b.room_id,
                    r.name AS room_name, r.capacity, r.hotel_id,
                    r.created_at AS room_created_at, r.updated_at AS room_updated_at
             FROM bookings b
             JOIN rooms r ON r.id = b.room_id
             WHERE b.user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(row.map(BookingWithRoom::from))
    }

    async fn create(&self, user_id: DbId, room_id: DbId) -> Result<Booking, CoreError> {
        let query = format!(
            "INSERT INTO bookings (user_id, room_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, BookingRow>(&query)
            .bind(user_id)
            .bind(room_id)
            .fetch_one(&self.pool)
            .await
            .map_err(create_error)?;
        Ok(Booking::from(row))
    }

    async fn change_room(&self, booking_id: DbId, room_id: DbId) -> Result<Booking, CoreError> {
        let query = format!(
            "UPDATE bookings
             SET room_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, BookingRow>(&query)
            .bind(booking_id)
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or(CoreError::NotFound {
                entity: "Booking",
                id: booking_id,
            })?;
        Ok(Booking::from(row))
    }
}

/// Classify an insert failure.
///
/// A violation of `uq_bookings_user_id` means the caller lost a race with
/// their own concurrent request; it degrades to the same `Forbidden` the
/// sequential duplicate check produces. PostgreSQL unique violations carry
/// error code 23505.
fn create_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505")
            && db_err.constraint() == Some("uq_bookings_user_id")
        {
            return CoreError::Forbidden("user already has an active booking".into());
        }
    }
    storage_error(err)
}
