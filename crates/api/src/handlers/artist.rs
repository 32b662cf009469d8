//! Handlers for artist pages and artist listings.

use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;
use booking_core::error::CoreError;
use booking_core::forms::{validate_form, ArtistForm, SearchForm};
use booking_core::schedule::{self, partition_by_start};
use booking_core::types::DbId;
use booking_db::models::artist::{Artist, ArtistDetails, ArtistProfile, ArtistSummary};
use booking_db::models::search::SearchResults;
use booking_db::models::show::{project_shows, ShowWithVenue};
use booking_db::repositories::{ArtistRepo, ShowRepo};
use serde::Serialize;
use sqlx::{Connection, PgConnection};

use super::{DeletedListing, EditPage, FormPage};
use crate::db_conn::DbConn;
use crate::path_id::PathId;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// Artist detail page.
#[derive(Debug, Serialize)]
pub struct ArtistPage {
    #[serde(flatten)]
    pub artist: ArtistProfile,
    pub past_shows: Vec<ShowWithVenue>,
    pub upcoming_shows: Vec<ShowWithVenue>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// GET /artists
pub async fn list(DbConn(mut conn): DbConn) -> AppResult<Json<DataResponse<Vec<ArtistSummary>>>> {
    let artists = ArtistRepo::list(&mut conn).await?;
    Ok(Json(DataResponse::new(artists)))
}

/// POST /artists/search
pub async fn search(
    DbConn(mut conn): DbConn,
    Json(form): Json<SearchForm>,
) -> AppResult<Json<DataResponse<SearchResults>>> {
    let hits = ArtistRepo::search(&mut conn, &form.like_pattern(), schedule::now()).await?;
    let term = form.search_term.trim().to_string();
    Ok(Json(DataResponse::new(SearchResults::new(term, hits))))
}

/// GET /artists/{id}
pub async fn get_by_id(
    DbConn(mut conn): DbConn,
    PathId(id): PathId,
) -> AppResult<Json<DataResponse<ArtistPage>>> {
    let artist = find_artist(&mut conn, id).await?;
    let rows = ShowRepo::list_for_artist(&mut conn, id).await?;

    // Rows arrive earliest first; past shows read most recent first.
    let mut shows = partition_by_start(schedule::now(), rows, |row| row.start_time);
    shows.past.reverse();

    let past_shows: Vec<ShowWithVenue> = project_shows(shows.past);
    let upcoming_shows: Vec<ShowWithVenue> = project_shows(shows.upcoming);

    Ok(Json(DataResponse::new(ArtistPage {
        artist: artist.profile()?,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })))
}

/// GET /artists/create
pub async fn create_form() -> Json<DataResponse<FormPage<ArtistForm>>> {
    Json(DataResponse::new(FormPage::with_genres(ArtistForm::default())))
}

/// POST /artists/create
pub async fn create(
    DbConn(mut conn): DbConn,
    Json(form): Json<ArtistForm>,
) -> AppResult<(StatusCode, Json<DataResponse<ArtistProfile>>)> {
    validate_form(&form)?;
    let details = ArtistDetails::from_form(form)?;

    let artist = match insert_artist(&mut conn, &details).await {
        Ok(artist) => artist,
        Err(source) => {
            tracing::warn!(error = %source, artist_name = %details.name, "Artist listing rolled back");
            return Err(AppError::Listing {
                message: format!("An error occurred. Artist {} could not be listed.", details.name),
                source,
            });
        }
    };

    tracing::info!(artist_id = artist.id, artist_name = %artist.details.name, "Artist listed");
    let message = format!("Artist {} was successfully listed!", artist.details.name);
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(artist.profile()?, message)),
    ))
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    DbConn(mut conn): DbConn,
    PathId(id): PathId,
) -> AppResult<Json<DataResponse<EditPage<ArtistProfile, ArtistForm>>>> {
    let artist = find_artist(&mut conn, id).await?;
    Ok(Json(DataResponse::new(EditPage {
        page: FormPage::with_genres(artist.to_form()?),
        entity: artist.profile()?,
    })))
}

/// POST /artists/{id}/edit
pub async fn update(
    DbConn(mut conn): DbConn,
    PathId(id): PathId,
    Json(form): Json<ArtistForm>,
) -> AppResult<Redirect> {
    validate_form(&form)?;
    let artist = find_artist(&mut conn, id).await?.apply_form(form)?;

    let updated = ArtistRepo::update(&mut conn, &artist)
        .await?
        .ok_or(CoreError::NotFound { entity: "Artist", id })?;

    tracing::info!(artist_id = id, artist_name = %updated.details.name, "Artist updated");
    Ok(Redirect::to(&format!("/artists/{id}")))
}

/// DELETE /artists/{id}
pub async fn delete(
    DbConn(mut conn): DbConn,
    PathId(id): PathId,
) -> AppResult<Json<DataResponse<DeletedListing>>> {
    let artist = find_artist(&mut conn, id).await?;
    if !ArtistRepo::delete(&mut conn, id).await? {
        return Err(CoreError::NotFound { entity: "Artist", id }.into());
    }

    let name = artist.details.name;
    tracing::info!(artist_id = id, artist_name = %name, "Artist deleted");
    let message = format!("Artist {name} was successfully deleted!");
    Ok(Json(DataResponse::with_message(
        DeletedListing { id, name },
        message,
    )))
}

async fn find_artist(conn: &mut PgConnection, id: DbId) -> AppResult<Artist> {
    ArtistRepo::find_by_id(conn, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Artist", id }.into())
}

async fn insert_artist(
    conn: &mut PgConnection,
    details: &ArtistDetails,
) -> Result<Artist, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let artist = ArtistRepo::create(&mut tx, details).await?;
    tx.commit().await?;
    Ok(artist)
}
