//! Repository for the `artists` table.

use booking_core::types::{DbId, Timestamp};
use sqlx::PgConnection;

use crate::models::artist::{Artist, ArtistDetails, ArtistSummary};
use crate::models::search::SearchHit;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genres, city, state, phone, website, \
                       facebook_link, seeking_venue, seeking_description, image_link, created_at";

/// Provides CRUD and directory queries for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    ///
    /// Fails with a unique violation on `uq_artists_name` if the name is taken.
    pub async fn create(conn: &mut PgConnection, input: &ArtistDetails) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, genres, city, state, phone, website,
                                  facebook_link, seeking_venue, seeking_description, image_link)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.genres)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.facebook_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .bind(&input.image_link)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Overwrite every detail column of an existing artist.
    ///
    /// Returns `None` if no row with the artist's `id` exists.
    pub async fn update(conn: &mut PgConnection, artist: &Artist) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = $2,
                genres = $3,
                city = $4,
                state = $5,
                phone = $6,
                website = $7,
                facebook_link = $8,
                seeking_venue = $9,
                seeking_description = $10,
                image_link = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let d = &artist.details;
        sqlx::query_as::<_, Artist>(&query)
            .bind(artist.id)
            .bind(&d.name)
            .bind(&d.genres)
            .bind(&d.city)
            .bind(&d.state)
            .bind(&d.phone)
            .bind(&d.website)
            .bind(&d.facebook_link)
            .bind(d.seeking_venue)
            .bind(&d.seeking_description)
            .bind(&d.image_link)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete an artist by ID. Its shows go with it (`ON DELETE CASCADE`).
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All artists in listing order.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>("SELECT id, name FROM artists ORDER BY id")
            .fetch_all(&mut *conn)
            .await
    }

    /// The most recently listed artists, newest first.
    pub async fn list_recent(conn: &mut PgConnection, limit: i64) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>("SELECT id, name FROM artists ORDER BY id DESC LIMIT $1")
            .bind(limit)
            .fetch_all(&mut *conn)
            .await
    }

    /// Artists whose name, city or state matches an `ILIKE` pattern.
    pub async fn search(
        conn: &mut PgConnection,
        pattern: &str,
        now: Timestamp,
    ) -> Result<Vec<SearchHit>, sqlx::Error> {
        sqlx::query_as::<_, SearchHit>(
            "SELECT a.id, a.name,
                    COUNT(s.id) FILTER (WHERE s.start_time >= $2) AS num_upcoming_shows
             FROM artists a
             LEFT JOIN shows s ON s.artist_id = a.id
             WHERE a.name ILIKE $1 OR a.city ILIKE $1 OR a.state ILIKE $1
             GROUP BY a.id
             ORDER BY a.name",
        )
        .bind(pattern)
        .bind(now)
        .fetch_all(&mut *conn)
        .await
    }

    /// Total number of artists.
    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM artists")
            .fetch_one(&mut *conn)
            .await?;
        Ok(row.0)
    }
}
