use std::sync::Arc;

use convene_core::booking::BookingService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). Handlers see only the port-backed [`BookingService`], so
/// tests can swap the Postgres repositories for in-memory stores without
/// touching the router.
#[derive(Clone)]
pub struct AppState {
    /// Booking domain service.
    pub bookings: BookingService,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
}
