//! Handlers for the show list and show listings.

use axum::http::StatusCode;
use axum::Json;
use booking_core::forms::{validate_form, ShowForm};
use booking_core::schedule;
use booking_db::models::show::{project_shows, NewShow, Show, ShowListing};
use booking_db::repositories::ShowRepo;
use sqlx::{Connection, PgConnection};

use super::FormPage;
use crate::db_conn::DbConn;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

const LISTED: &str = "Show was successfully listed!";
const NOT_LISTED: &str = "An error occurred. Show could not be listed.";

/// GET /shows
pub async fn list(DbConn(mut conn): DbConn) -> AppResult<Json<DataResponse<Vec<ShowListing>>>> {
    let rows = ShowRepo::list_all(&mut conn).await?;
    Ok(Json(DataResponse::new(project_shows(rows))))
}

/// GET /shows/create
///
/// The blank form starts at the current time with no artist or venue chosen.
pub async fn create_form() -> Json<DataResponse<FormPage<ShowForm>>> {
    Json(DataResponse::new(FormPage::new(ShowForm {
        artist_id: 0,
        venue_id: 0,
        start_time: schedule::now(),
    })))
}

/// POST /shows/create
pub async fn create(
    DbConn(mut conn): DbConn,
    Json(form): Json<ShowForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Show>>)> {
    validate_form(&form)?;
    let input = NewShow::from(form);

    let show = match insert_show(&mut conn, &input).await {
        Ok(show) => show,
        Err(source) => {
            tracing::warn!(
                error = %source,
                artist_id = input.artist_id,
                venue_id = input.venue_id,
                "Show listing rolled back"
            );
            return Err(AppError::Listing {
                message: NOT_LISTED.to_string(),
                source,
            });
        }
    };

    tracing::info!(
        show_id = show.id,
        artist_id = show.artist_id,
        venue_id = show.venue_id,
        "Show listed"
    );
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(show, LISTED)),
    ))
}

async fn insert_show(conn: &mut PgConnection, input: &NewShow) -> Result<Show, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let show = ShowRepo::create(&mut tx, input).await?;
    tx.commit().await?;
    Ok(show)
}
