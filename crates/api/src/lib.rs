//! Booking directory API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes)
//! so integration tests and the binary entrypoints can both access them.

pub mod config;
pub mod db_conn;
pub mod error;
pub mod handlers;
pub mod path_id;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
