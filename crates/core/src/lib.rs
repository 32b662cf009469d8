//! Domain logic for the booking directory.
//!
//! This crate has no internal dependencies so the database layer, the HTTP
//! layer and their tests can all share the same rules for genres, forms,
//! show scheduling and locale grouping.

pub mod error;
pub mod forms;
pub mod genres;
pub mod locale;
pub mod schedule;
pub mod types;
