//! Handlers for the `/booking` resource.
//!
//! All endpoints require authentication via [`AuthUser`]; the service
//! re-checks booking entitlement (enrollment, paid in-person ticket with
//! hotel) on every call.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use convene_core::model::BookingWithRoom;
use convene_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for creating or moving a booking: exactly one required
/// numeric `roomId` field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BookingRequest {
    pub room_id: DbId,
}

/// Identifier envelope returned by the write endpoints.
#[derive(Debug, Serialize)]
pub struct BookingIdResponse {
    pub booking_id: DbId,
}

/// GET /booking
///
/// The caller's current booking together with its room.
pub async fn get_booking(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<BookingWithRoom>>> {
    let booking = state.bookings.current_booking(auth.user_id).await?;

    Ok(Json(DataResponse { data: booking }))
}

/// POST /booking
///
/// Reserve a room for the caller. Returns the created booking id.
pub async fn create_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<BookingIdResponse>>> {
    let Json(input) = payload.map_err(bad_body)?;

    let booking = state
        .bookings
        .book_room(auth.user_id, input.room_id)
        .await?;

    tracing::info!(
        booking_id = booking.id,
        room_id = booking.room_id,
        user_id = auth.user_id,
        "Booking created",
    );

    Ok(Json(DataResponse {
        data: BookingIdResponse {
            booking_id: booking.id,
        },
    }))
}

/// PUT /booking/{bookingId}
///
/// Move the caller's booking to another room. Returns the booking id.
pub async fn update_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<BookingIdResponse>>> {
    let Json(input) = payload.map_err(bad_body)?;

    let booking = state
        .bookings
        .change_room(auth.user_id, booking_id, input.room_id)
        .await?;

    tracing::info!(
        booking_id = booking.id,
        room_id = booking.room_id,
        user_id = auth.user_id,
        "Booking moved",
    );

    Ok(Json(DataResponse {
        data: BookingIdResponse {
            booking_id: booking.id,
        },
    }))
}

/// The body contract is strict: a malformed body is a 400, not axum's
/// default 422.
fn bad_body(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}
