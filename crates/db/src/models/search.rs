//! Search result records shared by venue and artist search.

use booking_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One matching venue or artist with its upcoming show count.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SearchHit {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Search page payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
    pub search_term: String,
}

impl SearchResults {
    pub fn new(search_term: String, data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
            search_term,
        }
    }
}
