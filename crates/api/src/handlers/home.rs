use axum::Json;
use booking_db::models::artist::ArtistSummary;
use booking_db::models::venue::RecentVenue;
use booking_db::repositories::{ArtistRepo, VenueRepo};
use serde::Serialize;

use crate::db_conn::DbConn;
use crate::error::AppResult;
use crate::response::DataResponse;

/// How many recent venues and artists the home page lists.
pub const RECENT_LISTINGS: i64 = 10;

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub venues: Vec<RecentVenue>,
    pub artists: Vec<ArtistSummary>,
}

/// GET /
pub async fn index(DbConn(mut conn): DbConn) -> AppResult<Json<DataResponse<HomePage>>> {
    let venues = VenueRepo::list_recent(&mut conn, RECENT_LISTINGS).await?;
    let artists = ArtistRepo::list_recent(&mut conn, RECENT_LISTINGS).await?;
    Ok(Json(DataResponse::new(HomePage { venues, artists })))
}
