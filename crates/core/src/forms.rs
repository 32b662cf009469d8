//! Listing form payloads and their validation.
//!
//! Forms are decoded with `serde` and checked with `validator`. A payload
//! either passes [`validate_form`] as a fully populated value or is rejected
//! with a [`CoreError::Validation`] naming every offending field. Missing
//! fields decode to their empty defaults so they surface as validation
//! failures rather than as decoding errors.

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::genres::validate_genres;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

/// Submitted venue listing (create and edit).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct VenueForm {
    #[validate(custom(function = "not_blank"), length(max = 120))]
    pub name: String,
    #[validate(custom(function = "validate_genre_list"))]
    pub genres: Vec<String>,
    #[validate(custom(function = "not_blank"), length(max = 120))]
    pub address: String,
    #[validate(custom(function = "not_blank"), length(max = 120))]
    pub city: String,
    #[validate(custom(function = "not_blank"), length(max = 120))]
    pub state: String,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(length(max = 120))]
    pub phone: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(url, length(max = 120))]
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    #[serde(deserialize_with = "blank_as_none")]
    pub seeking_description: Option<String>,
}

// ---------------------------------------------------------------------------
// Artist
// ---------------------------------------------------------------------------

/// Submitted artist listing (create and edit).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ArtistForm {
    #[validate(custom(function = "not_blank"), length(max = 120))]
    pub name: String,
    #[validate(custom(function = "validate_genre_list"))]
    pub genres: Vec<String>,
    #[validate(custom(function = "not_blank"), length(max = 120))]
    pub city: String,
    #[validate(custom(function = "not_blank"), length(max = 120))]
    pub state: String,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(length(max = 120))]
    pub phone: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(url, length(max = 120))]
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    #[serde(deserialize_with = "blank_as_none")]
    pub seeking_description: Option<String>,
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

/// Submitted show listing. All three fields are required.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
pub struct ShowForm {
    #[validate(range(min = 1, message = "artist_id must be a positive id"))]
    pub artist_id: DbId,
    #[validate(range(min = 1, message = "venue_id must be a positive id"))]
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Search box payload. A missing term searches for everything.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}

impl SearchForm {
    /// The term as a case-insensitive `ILIKE` substring pattern.
    pub fn like_pattern(&self) -> String {
        format!("%{}%", escape_like(self.search_term.trim()))
    }
}

/// Escape `LIKE` metacharacters so they match literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// ---------------------------------------------------------------------------
// Validation entry point
// ---------------------------------------------------------------------------

/// Run a form's validation rules, folding every failure into one message.
pub fn validate_form<T: Validate>(form: &T) -> Result<(), CoreError> {
    form.validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Render validation errors as `field: reason` pairs sorted by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            format!("{field}: {}", reasons.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

fn validate_genre_list(genres: &[String]) -> Result<(), ValidationError> {
    validate_genres(genres).map_err(|e| {
        let mut error = ValidationError::new("genres");
        if let CoreError::Validation(message) = e {
            error.message = Some(message.into());
        }
        error
    })
}

/// Treat empty or whitespace-only optional text as absent.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
