//! Repository for the `venues` table.

use booking_core::types::{DbId, Timestamp};
use sqlx::PgConnection;

use crate::models::search::SearchHit;
use crate::models::venue::{RecentVenue, Venue, VenueDetails, VenueSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genres, address, city, state, phone, website, \
                       facebook_link, seeking_talent, seeking_description, image_link, created_at";

/// Provides CRUD and directory queries for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    ///
    /// Fails with a unique violation on `uq_venues_name` if the name is taken.
    pub async fn create(conn: &mut PgConnection, input: &VenueDetails) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, genres, address, city, state, phone, website,
                                 facebook_link, seeking_talent, seeking_description, image_link)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.genres)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.facebook_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .bind(&input.image_link)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Overwrite every detail column of an existing venue.
    ///
    /// Returns `None` if no row with the venue's `id` exists.
    pub async fn update(conn: &mut PgConnection, venue: &Venue) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = $2,
                genres = $3,
                address = $4,
                city = $5,
                state = $6,
                phone = $7,
                website = $8,
                facebook_link = $9,
                seeking_talent = $10,
                seeking_description = $11,
                image_link = $12
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let d = &venue.details;
        sqlx::query_as::<_, Venue>(&query)
            .bind(venue.id)
            .bind(&d.name)
            .bind(&d.genres)
            .bind(&d.address)
            .bind(&d.city)
            .bind(&d.state)
            .bind(&d.phone)
            .bind(&d.website)
            .bind(&d.facebook_link)
            .bind(d.seeking_talent)
            .bind(&d.seeking_description)
            .bind(&d.image_link)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a venue by ID. Its shows go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The most recently listed venues, newest first.
    pub async fn list_recent(conn: &mut PgConnection, limit: i64) -> Result<Vec<RecentVenue>, sqlx::Error> {
        sqlx::query_as::<_, RecentVenue>(
            "SELECT id, name, city, state FROM venues ORDER BY id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&mut *conn)
        .await
    }

    /// Every venue with the number of shows starting at or after `now`.
    ///
    /// Ordered by ID so locale grouping sees venues in listing order.
    pub async fn list_with_upcoming_counts(
        conn: &mut PgConnection,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        sqlx::query_as::<_, VenueSummary>(
            "SELECT v.id, v.name, v.city, v.state,
                    COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows
             FROM venues v
             LEFT JOIN shows s ON s.venue_id = v.id
             GROUP BY v.id
             ORDER BY v.id",
        )
        .bind(now)
        .fetch_all(&mut *conn)
        .await
    }

    /// Venues whose name, city or state matches an `ILIKE` pattern.
    pub async fn search(
        conn: &mut PgConnection,
        pattern: &str,
        now: Timestamp,
    ) -> Result<Vec<SearchHit>, sqlx::Error> {
        sqlx::query_as::<_, SearchHit>(
            "SELECT v.id, v.name,
                    COUNT(s.id) FILTER (WHERE s.start_time >= $2) AS num_upcoming_shows
             FROM venues v
             LEFT JOIN shows s ON s.venue_id = v.id
             WHERE v.name ILIKE $1 OR v.city ILIKE $1 OR v.state ILIKE $1
             GROUP BY v.id
             ORDER BY v.name",
        )
        .bind(pattern)
        .bind(now)
        .fetch_all(&mut *conn)
        .await
    }

    /// Total number of venues.
    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM venues")
            .fetch_one(&mut *conn)
            .await?;
        Ok(row.0)
    }
}
