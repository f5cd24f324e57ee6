//! Row structs matching query shapes.
//!
//! Rows are the adapter's own types; each converts into the corresponding
//! `convene-core` domain type so nothing above this crate sees SQL.

pub mod booking;
pub mod eligibility;
pub mod room;
