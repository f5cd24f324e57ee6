pub mod booking;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// The booking paths are part of the published API contract and are
/// mounted unversioned:
///
/// ```text
/// /health                     liveness (no auth)
///
/// /booking                    current booking, reserve (auth required)
/// /booking/{bookingId}        move booking (auth required)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/booking", booking::router())
}
