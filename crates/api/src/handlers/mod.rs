//! Request handlers.
//!
//! Handlers delegate to the domain service on [`crate::state::AppState`]
//! and map errors via [`crate::error::AppError`].

pub mod booking;
