use crate::types::DbId;

/// Closed set of domain failure kinds.
///
/// Every booking operation resolves to a value or exactly one of these;
/// the HTTP boundary maps each kind to a status code and handles the set
/// exhaustively.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Target room is at capacity. Surfaced to clients with the same
    /// status as [`CoreError::Forbidden`], kept distinct for logs.
    #[error("Room {room_id} is at capacity")]
    RoomFull { room_id: DbId },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
