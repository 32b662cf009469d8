//! Page handlers.
//!
//! Each handler returns the page model as JSON inside a [`DataResponse`]
//! envelope; form submissions carry the user notice in `message`.
//!
//! [`DataResponse`]: crate::response::DataResponse

pub mod artist;
pub mod home;
pub mod show;
pub mod venue;

use axum::http::Uri;
use booking_core::genres::GENRE_CHOICES;
use booking_core::types::DbId;
use serde::Serialize;

use crate::error::AppError;

/// A form page: the form to fill in plus the genre suggestions.
#[derive(Debug, Serialize)]
pub struct FormPage<F: Serialize> {
    pub form: F,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genre_choices: Vec<&'static str>,
}

impl<F: Serialize> FormPage<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            genre_choices: Vec::new(),
        }
    }

    /// Form page offering the suggested genre list.
    pub fn with_genres(form: F) -> Self {
        Self {
            form,
            genre_choices: GENRE_CHOICES.to_vec(),
        }
    }
}

/// Edit page: the stored entity next to its pre-populated form.
#[derive(Debug, Serialize)]
pub struct EditPage<E: Serialize, F: Serialize> {
    #[serde(flatten)]
    pub page: FormPage<F>,
    pub entity: E,
}

/// Payload returned after a listing is removed.
#[derive(Debug, Serialize)]
pub struct DeletedListing {
    pub id: DbId,
    pub name: String,
}

/// Handler for requests that match no route.
pub async fn fallback(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
