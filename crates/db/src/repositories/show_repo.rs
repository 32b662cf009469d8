//! Repository for the `shows` table.
//!
//! Shows are only ever inserted here; they disappear through the cascade
//! when their venue or artist is deleted.

use booking_core::types::DbId;
use sqlx::PgConnection;

use crate::models::show::{ArtistShowRow, NewShow, Show, ShowListingRow, VenueShowRow};

const COLUMNS: &str = "id, start_time, venue_id, artist_id, created_at";

pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show.
    ///
    /// Fails with a foreign key violation if the artist or venue is missing.
    pub async fn create(conn: &mut PgConnection, input: &NewShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (artist_id, venue_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(input.artist_id)
            .bind(input.venue_id)
            .bind(input.start_time)
            .fetch_one(&mut *conn)
            .await
    }

    /// Shows at a venue with their artists, earliest first.
    pub async fn list_for_venue(
        conn: &mut PgConnection,
        venue_id: DbId,
    ) -> Result<Vec<VenueShowRow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShowRow>(
            "SELECT a.id AS artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.start_time, s.id",
        )
        .bind(venue_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Shows by an artist with their venues, earliest first.
    pub async fn list_for_artist(
        conn: &mut PgConnection,
        artist_id: DbId,
    ) -> Result<Vec<ArtistShowRow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShowRow>(
            "SELECT v.id AS venue_id, v.name AS venue_name,
                    v.image_link AS venue_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.start_time, s.id",
        )
        .bind(artist_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Every show joined with its artist and venue, earliest first.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<ShowListingRow>, sqlx::Error> {
        sqlx::query_as::<_, ShowListingRow>(
            "SELECT a.id AS artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link,
                    v.id AS venue_id, v.name AS venue_name, s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             JOIN venues v ON v.id = s.venue_id
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(&mut *conn)
        .await
    }

    /// Number of shows referencing a venue.
    pub async fn count_for_venue(conn: &mut PgConnection, venue_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows WHERE venue_id = $1")
            .bind(venue_id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(row.0)
    }

    /// Number of shows referencing an artist.
    pub async fn count_for_artist(conn: &mut PgConnection, artist_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows WHERE artist_id = $1")
            .bind(artist_id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(row.0)
    }
}
