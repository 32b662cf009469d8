//! Venue entity model, value records and summaries.

use booking_core::error::CoreError;
use booking_core::forms::VenueForm;
use booking_core::genres::{deserialize_genres, serialize_genres};
use booking_core::locale::Locale;
use booking_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Every persisted venue column except the identity columns.
///
/// This is the value record written on insert and update.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct VenueDetails {
    pub name: String,
    /// JSON array text; decode with [`VenueDetails::genre_list`].
    pub genres: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

impl VenueDetails {
    /// Build the persisted field set from a validated form.
    pub fn from_form(form: VenueForm) -> Result<Self, CoreError> {
        let genres: Vec<String> = form.genres.iter().map(|g| g.trim().to_string()).collect();
        Ok(Self {
            name: form.name.trim().to_string(),
            genres: serialize_genres(&genres)?,
            address: form.address.trim().to_string(),
            city: form.city.trim().to_string(),
            state: form.state.trim().to_string(),
            phone: form.phone,
            website: form.website_link,
            facebook_link: form.facebook_link,
            seeking_talent: form.seeking_talent,
            seeking_description: form.seeking_description,
            image_link: form.image_link,
        })
    }

    pub fn genre_list(&self) -> Result<Vec<String>, CoreError> {
        deserialize_genres(&self.genres)
    }
}

/// A row from the `venues` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Venue {
    pub id: DbId,
    #[sqlx(flatten)]
    pub details: VenueDetails,
    pub created_at: Timestamp,
}

impl Venue {
    /// Return a copy of this venue carrying the form's fields.
    ///
    /// Identity columns are kept; every other column comes from the form.
    pub fn apply_form(self, form: VenueForm) -> Result<Self, CoreError> {
        Ok(Self {
            details: VenueDetails::from_form(form)?,
            ..self
        })
    }

    /// Pre-populate an edit form from the stored venue.
    pub fn to_form(&self) -> Result<VenueForm, CoreError> {
        let d = &self.details;
        Ok(VenueForm {
            name: d.name.clone(),
            genres: d.genre_list()?,
            address: d.address.clone(),
            city: d.city.clone(),
            state: d.state.clone(),
            phone: d.phone.clone(),
            image_link: d.image_link.clone(),
            facebook_link: d.facebook_link.clone(),
            website_link: d.website.clone(),
            seeking_talent: d.seeking_talent,
            seeking_description: d.seeking_description.clone(),
        })
    }

    /// Public view of the venue with its genres decoded.
    pub fn profile(&self) -> Result<VenueProfile, CoreError> {
        let d = &self.details;
        Ok(VenueProfile {
            id: self.id,
            name: d.name.clone(),
            genres: d.genre_list()?,
            address: d.address.clone(),
            city: d.city.clone(),
            state: d.state.clone(),
            phone: d.phone.clone(),
            website: d.website.clone(),
            facebook_link: d.facebook_link.clone(),
            seeking_talent: d.seeking_talent,
            seeking_description: d.seeking_description.clone(),
            image_link: d.image_link.clone(),
        })
    }
}

/// Venue as shown on pages: genres are a list, not stored text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueProfile {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

/// Directory entry: a venue with its upcoming show count.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

impl Locale for VenueSummary {
    fn state(&self) -> &str {
        &self.state
    }

    fn city(&self) -> &str {
        &self.city
    }
}

/// Home page entry for a recently listed venue.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct RecentVenue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn form() -> VenueForm {
        VenueForm {
            name: " The Musical Hop ".to_string(),
            genres: vec!["Jazz".to_string(), " Blues".to_string()],
            address: "1015 Folsom Street".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("123-123-1234".to_string()),
            image_link: None,
            facebook_link: None,
            website_link: Some("https://www.themusicalhop.com".to_string()),
            seeking_talent: true,
            seeking_description: Some("Looking for local artists".to_string()),
        }
    }

    #[test]
    fn from_form_maps_every_field() {
        let details = VenueDetails::from_form(form()).unwrap();
        assert_eq!(details.name, "The Musical Hop");
        assert_eq!(details.genres, r#"["Jazz","Blues"]"#);
        assert_eq!(details.website.as_deref(), Some("https://www.themusicalhop.com"));
        assert!(details.seeking_talent);
    }

    #[test]
    fn apply_form_keeps_identity() {
        let created_at = Utc::now();
        let venue = Venue {
            id: 7,
            details: VenueDetails::from_form(form()).unwrap(),
            created_at,
        };

        let mut edited = form();
        edited.name = "The Musical Hop II".to_string();
        edited.seeking_talent = false;
        let updated = venue.clone().apply_form(edited).unwrap();

        assert_eq!(updated.id, 7);
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.details.name, "The Musical Hop II");
        assert!(!updated.details.seeking_talent);
        assert_eq!(venue.details.name, "The Musical Hop");
    }

    #[test]
    fn to_form_decodes_genres_and_links() {
        let venue = Venue {
            id: 1,
            details: VenueDetails::from_form(form()).unwrap(),
            created_at: Utc::now(),
        };
        let prefilled = venue.to_form().unwrap();
        assert_eq!(prefilled.genres, vec!["Jazz", "Blues"]);
        assert_eq!(
            prefilled.website_link.as_deref(),
            Some("https://www.themusicalhop.com")
        );
    }

    #[test]
    fn corrupt_genres_fail_profile() {
        let mut details = VenueDetails::from_form(form()).unwrap();
        details.genres = "Jazz".to_string();
        let venue = Venue {
            id: 1,
            details,
            created_at: Utc::now(),
        };
        assert!(matches!(venue.profile(), Err(CoreError::Internal(_))));
    }
}
