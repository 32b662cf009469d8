//! Domain model structs and value records.
//!
//! Each entity submodule contains:
//! - A `FromRow` row struct matching the table
//! - A `*Details` value record written on insert and update
//! - The summaries and joined rows read back by the repositories

pub mod artist;
pub mod search;
pub mod show;
pub mod venue;
