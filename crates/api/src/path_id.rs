//! Entity id extractor for `/{kind}/{id}` routes.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use booking_core::types::DbId;

use crate::error::AppError;

/// The `{id}` segment of the request path as a [`DbId`].
///
/// A segment that is not an integer in range names no entity, so it is
/// rejected with the same JSON 404 as an unknown route rather than axum's
/// plain-text path rejection.
pub struct PathId(pub DbId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(raw)| raw)
            .ok();

        match raw.as_deref().map(str::parse::<DbId>) {
            Some(Ok(id)) => Ok(PathId(id)),
            _ => Err(AppError::RouteNotFound(parts.uri.path().to_string())),
        }
    }
}
