//! Show entity model, joined rows and their display projections.
//!
//! Joined rows keep the raw start time so callers can classify them as past
//! or upcoming first; the display records carry the formatted date.

use booking_core::forms::ShowForm;
use booking_core::schedule::format_show_date;
use booking_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `shows` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub start_time: Timestamp,
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub created_at: Timestamp,
}

/// Value record for inserting a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

impl From<ShowForm> for NewShow {
    fn from(form: ShowForm) -> Self {
        Self {
            artist_id: form.artist_id,
            venue_id: form.venue_id,
            start_time: form.start_time,
        }
    }
}

// ---------------------------------------------------------------------------
// Joined rows
// ---------------------------------------------------------------------------

/// A venue's show joined with the performing artist.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct VenueShowRow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// An artist's show joined with the hosting venue.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ArtistShowRow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show joined with both its artist and venue.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ShowListingRow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub venue_id: DbId,
    pub venue_name: String,
    pub start_time: Timestamp,
}

// ---------------------------------------------------------------------------
// Display records
// ---------------------------------------------------------------------------

/// Show entry on a venue page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowWithArtist {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<VenueShowRow> for ShowWithArtist {
    fn from(row: VenueShowRow) -> Self {
        Self {
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: format_show_date(row.start_time),
        }
    }
}

/// Show entry on an artist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowWithVenue {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

impl From<ArtistShowRow> for ShowWithVenue {
    fn from(row: ArtistShowRow) -> Self {
        Self {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            venue_image_link: row.venue_image_link,
            start_time: format_show_date(row.start_time),
        }
    }
}

/// Show entry on the show list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub venue_id: DbId,
    pub venue_name: String,
    pub start_time: String,
}

impl From<ShowListingRow> for ShowListing {
    fn from(row: ShowListingRow) -> Self {
        Self {
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            start_time: format_show_date(row.start_time),
        }
    }
}

/// Project joined rows into display records, one per row, in order.
pub fn project_shows<R, D>(rows: impl IntoIterator<Item = R>) -> Vec<D>
where
    D: From<R>,
{
    rows.into_iter().map(D::from).collect()
}
