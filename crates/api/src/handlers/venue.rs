//! Handlers for venue pages and venue listings.

use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;
use booking_core::error::CoreError;
use booking_core::forms::{validate_form, SearchForm, VenueForm};
use booking_core::locale::{group_by_locale, LocaleGroup};
use booking_core::schedule::{self, partition_by_start};
use booking_core::types::DbId;
use booking_db::models::search::SearchResults;
use booking_db::models::show::{project_shows, ShowWithArtist};
use booking_db::models::venue::{Venue, VenueDetails, VenueProfile, VenueSummary};
use booking_db::repositories::{ShowRepo, VenueRepo};
use serde::Serialize;
use sqlx::{Connection, PgConnection};

use super::{DeletedListing, EditPage, FormPage};
use crate::db_conn::DbConn;
use crate::path_id::PathId;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// Venue detail page.
#[derive(Debug, Serialize)]
pub struct VenuePage {
    #[serde(flatten)]
    pub venue: VenueProfile,
    pub past_shows: Vec<ShowWithArtist>,
    pub upcoming_shows: Vec<ShowWithArtist>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// GET /venues
pub async fn list(
    DbConn(mut conn): DbConn,
) -> AppResult<Json<DataResponse<Vec<LocaleGroup<VenueSummary>>>>> {
    let venues = VenueRepo::list_with_upcoming_counts(&mut conn, schedule::now()).await?;
    Ok(Json(DataResponse::new(group_by_locale(venues))))
}

/// POST /venues/search
pub async fn search(
    DbConn(mut conn): DbConn,
    Json(form): Json<SearchForm>,
) -> AppResult<Json<DataResponse<SearchResults>>> {
    let hits = VenueRepo::search(&mut conn, &form.like_pattern(), schedule::now()).await?;
    let term = form.search_term.trim().to_string();
    Ok(Json(DataResponse::new(SearchResults::new(term, hits))))
}

/// GET /venues/{id}
pub async fn get_by_id(
    DbConn(mut conn): DbConn,
    PathId(id): PathId,
) -> AppResult<Json<DataResponse<VenuePage>>> {
    let venue = find_venue(&mut conn, id).await?;
    let rows = ShowRepo::list_for_venue(&mut conn, id).await?;

    // Rows arrive earliest first; past shows read most recent first.
    let mut shows = partition_by_start(schedule::now(), rows, |row| row.start_time);
    shows.past.reverse();

    let past_shows: Vec<ShowWithArtist> = project_shows(shows.past);
    let upcoming_shows: Vec<ShowWithArtist> = project_shows(shows.upcoming);

    Ok(Json(DataResponse::new(VenuePage {
        venue: venue.profile()?,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })))
}

/// GET /venues/create
pub async fn create_form() -> Json<DataResponse<FormPage<VenueForm>>> {
    Json(DataResponse::new(FormPage::with_genres(VenueForm::default())))
}

/// POST /venues/create
pub async fn create(
    DbConn(mut conn): DbConn,
    Json(form): Json<VenueForm>,
) -> AppResult<(StatusCode, Json<DataResponse<VenueProfile>>)> {
    validate_form(&form)?;
    let details = VenueDetails::from_form(form)?;

    let venue = match insert_venue(&mut conn, &details).await {
        Ok(venue) => venue,
        Err(source) => {
            tracing::warn!(error = %source, venue_name = %details.name, "Venue listing rolled back");
            return Err(AppError::Listing {
                message: format!("An error occurred. Venue {} could not be listed.", details.name),
                source,
            });
        }
    };

    tracing::info!(venue_id = venue.id, venue_name = %venue.details.name, "Venue listed");
    let message = format!("Venue {} was successfully listed!", venue.details.name);
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(venue.profile()?, message)),
    ))
}

/// GET /venues/{id}/edit
pub async fn edit_form(
    DbConn(mut conn): DbConn,
    PathId(id): PathId,
) -> AppResult<Json<DataResponse<EditPage<VenueProfile, VenueForm>>>> {
    let venue = find_venue(&mut conn, id).await?;
    Ok(Json(DataResponse::new(EditPage {
        page: FormPage::with_genres(venue.to_form()?),
        entity: venue.profile()?,
    })))
}

/// POST /venues/{id}/edit
pub async fn update(
    DbConn(mut conn): DbConn,
    PathId(id): PathId,
    Json(form): Json<VenueForm>,
) -> AppResult<Redirect> {
    validate_form(&form)?;
    let venue = find_venue(&mut conn, id).await?.apply_form(form)?;

    let updated = VenueRepo::update(&mut conn, &venue)
        .await?
        .ok_or(CoreError::NotFound { entity: "Venue", id })?;

    tracing::info!(venue_id = id, venue_name = %updated.details.name, "Venue updated");
    Ok(Redirect::to(&format!("/venues/{id}")))
}

/// DELETE /venues/{id}
pub async fn delete(
    DbConn(mut conn): DbConn,
    PathId(id): PathId,
) -> AppResult<Json<DataResponse<DeletedListing>>> {
    let venue = find_venue(&mut conn, id).await?;
    if !VenueRepo::delete(&mut conn, id).await? {
        return Err(CoreError::NotFound { entity: "Venue", id }.into());
    }

    let name = venue.details.name;
    tracing::info!(venue_id = id, venue_name = %name, "Venue deleted");
    let message = format!("Venue {name} was successfully deleted!");
    Ok(Json(DataResponse::with_message(
        DeletedListing { id, name },
        message,
    )))
}

async fn find_venue(conn: &mut PgConnection, id: DbId) -> AppResult<Venue> {
    VenueRepo::find_by_id(conn, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Venue", id }.into())
}

/// Insert inside a transaction; dropping it uncommitted rolls back.
async fn insert_venue(
    conn: &mut PgConnection,
    details: &VenueDetails,
) -> Result<Venue, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let venue = VenueRepo::create(&mut tx, details).await?;
    tx.commit().await?;
    Ok(venue)
}
