//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real router with the full middleware stack over in-memory
//! storage ports, so the whole request path (auth extraction, body
//! validation, domain service, error mapping) is exercised without a
//! database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use convene_api::auth::jwt::{generate_access_token, JwtConfig};
use convene_api::config::ServerConfig;
use convene_api::router::build_app_router;
use convene_api::state::AppState;
use convene_core::booking::BookingService;
use convene_core::error::CoreError;
use convene_core::model::{
    Booking, BookingWithRoom, Enrollment, Room, Ticket, TicketStatus, TicketType,
};
use convene_core::store::{BookingStore, EligibilityStore, RoomStore};
use convene_core::types::DbId;

/// In-memory implementation of all three storage ports.
#[derive(Default)]
pub struct TestStore {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    rooms: HashMap<DbId, Room>,
    bookings: HashMap<DbId, Booking>,
    enrollments: HashMap<DbId, Enrollment>,
    tickets: HashMap<DbId, Ticket>,
    next_id: DbId,
}

impl TestStore {
    pub fn add_room(&self, id: DbId, capacity: i32) {
        let now = chrono::Utc::now();
        self.state.lock().unwrap().rooms.insert(
            id,
            Room {
                id,
                name: format!("Room {id}"),
                capacity,
                hotel_id: 1,
                created_at: now,
                updated_at: now,
            },
        );
    }

    pub fn add_enrollment(&self, user_id: DbId) -> DbId {
        let mut state = self.state.lock().unwrap();
        let id = user_id + 100;
        state.enrollments.insert(user_id, Enrollment { id, user_id });
        id
    }

    pub fn add_ticket(
        &self,
        enrollment_id: DbId,
        status: TicketStatus,
        remote: bool,
        hotel: bool,
    ) {
        self.state.lock().unwrap().tickets.insert(
            enrollment_id,
            Ticket {
                id: enrollment_id + 200,
                enrollment_id,
                status,
                ticket_type: TicketType {
                    id: 1,
                    name: "Standard".into(),
                    price: 25_000,
                    is_remote: remote,
                    includes_hotel: hotel,
                },
            },
        );
    }

    /// Enrollment plus a paid, in-person, hotel-inclusive ticket.
    pub fn add_eligible_user(&self, user_id: DbId) {
        let enrollment_id = self.add_enrollment(user_id);
        self.add_ticket(enrollment_id, TicketStatus::Paid, false, true);
    }

    pub fn add_booking(&self, user_id: DbId, room_id: DbId) -> DbId {
        let now = chrono::Utc::now();
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.bookings.insert(
            id,
            Booking {
                id,
                user_id,
                room_id,
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    /// Current room of a user's booking, if any. Used to assert that
    /// rejected writes left state untouched.
    pub fn room_of_user(&self, user_id: DbId) -> Option<DbId> {
        let state = self.state.lock().unwrap();
        state
            .bookings
            .values()
            .find(|b| b.user_id == user_id)
            .map(|b| b.room_id)
    }
}

#[async_trait]
impl RoomStore for TestStore {
    async fn find_room(&self, room_id: DbId) -> Result<Option<Room>, CoreError> {
        Ok(self.state.lock().unwrap().rooms.get(&room_id).cloned())
    }

    async fn count_bookings(&self, room_id: DbId) -> Result<i64, CoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .bookings
            .values()
            .filter(|b| b.room_id == room_id)
            .count() as i64)
    }
}

#[async_trait]
impl BookingStore for TestStore {
    async fn find_by_user(&self, user_id: DbId) -> Result<Option<BookingWithRoom>, CoreError> {
        let state = self.state.lock().unwrap();
        let booking = state.bookings.values().find(|b| b.user_id == user_id);
        Ok(booking.map(|b| BookingWithRoom {
            id: b.id,
            user_id: b.user_id,
            room: state.rooms[&b.room_id].clone(),
        }))
    }

    async fn create(&self, user_id: DbId, room_id: DbId) -> Result<Booking, CoreError> {
        let id = self.add_booking(user_id, room_id);
        Ok(self.state.lock().unwrap().bookings[&id].clone())
    }

    async fn change_room(&self, booking_id: DbId, room_id: DbId) -> Result<Booking, CoreError> {
        let mut state = self.state.lock().unwrap();
        let booking = state
            .bookings
            .get_mut(&booking_id)
            .ok_or(CoreError::NotFound {
                entity: "Booking",
                id: booking_id,
            })?;
        booking.room_id = room_id;
        booking.updated_at = chrono::Utc::now();
        Ok(booking.clone())
    }
}

#[async_trait]
impl EligibilityStore for TestStore {
    async fn find_enrollment_by_user(
        &self,
        user_id: DbId,
    ) -> Result<Option<Enrollment>, CoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .enrollments
            .get(&user_id)
            .cloned())
    }

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: DbId,
    ) -> Result<Option<Ticket>, CoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .tickets
            .get(&enrollment_id)
            .cloned())
    }
}

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over the given in-memory store.
///
/// Mirrors the wiring in `main.rs` so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(store: &Arc<TestStore>) -> Router {
    let config = test_config();

    let bookings = BookingService::new(
        Arc::clone(store) as Arc<dyn RoomStore>,
        Arc::clone(store) as Arc<dyn BookingStore>,
        Arc::clone(store) as Arc<dyn EligibilityStore>,
    );

    let state = AppState {
        bookings,
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// `Authorization` header value for the given user.
pub fn bearer_token(user_id: DbId) -> String {
    let token =
        generate_access_token(user_id, &test_config().jwt).expect("token generation should succeed");
    format!("Bearer {token}")
}

pub async fn get(app: Router, uri: &str, auth: Option<&str>) -> Response {
    send(app, Method::GET, uri, auth, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    auth: Option<&str>,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, auth, Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    auth: Option<&str>,
    body: serde_json::Value,
) -> Response {
    send(app, Method::PUT, uri, auth, Some(body)).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
