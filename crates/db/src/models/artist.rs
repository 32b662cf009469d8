//! Artist entity model, value records and summaries.

use booking_core::error::CoreError;
use booking_core::forms::ArtistForm;
use booking_core::genres::{deserialize_genres, serialize_genres};
use booking_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Every persisted artist column except the identity columns.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ArtistDetails {
    pub name: String,
    /// JSON array text; decode with [`ArtistDetails::genre_list`].
    pub genres: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

impl ArtistDetails {
    /// Build the persisted field set from a validated form.
    pub fn from_form(form: ArtistForm) -> Result<Self, CoreError> {
        let genres: Vec<String> = form.genres.iter().map(|g| g.trim().to_string()).collect();
        Ok(Self {
            name: form.name.trim().to_string(),
            genres: serialize_genres(&genres)?,
            city: form.city.trim().to_string(),
            state: form.state.trim().to_string(),
            phone: form.phone,
            website: form.website_link,
            facebook_link: form.facebook_link,
            seeking_venue: form.seeking_venue,
            seeking_description: form.seeking_description,
            image_link: form.image_link,
        })
    }

    pub fn genre_list(&self) -> Result<Vec<String>, CoreError> {
        deserialize_genres(&self.genres)
    }
}

/// A row from the `artists` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Artist {
    pub id: DbId,
    #[sqlx(flatten)]
    pub details: ArtistDetails,
    pub created_at: Timestamp,
}

impl Artist {
    /// Return a copy of this artist carrying the form's fields.
    pub fn apply_form(self, form: ArtistForm) -> Result<Self, CoreError> {
        Ok(Self {
            details: ArtistDetails::from_form(form)?,
            ..self
        })
    }

    /// Pre-populate an edit form from the stored artist.
    pub fn to_form(&self) -> Result<ArtistForm, CoreError> {
        let d = &self.details;
        Ok(ArtistForm {
            name: d.name.clone(),
            genres: d.genre_list()?,
            city: d.city.clone(),
            state: d.state.clone(),
            phone: d.phone.clone(),
            image_link: d.image_link.clone(),
            facebook_link: d.facebook_link.clone(),
            website_link: d.website.clone(),
            seeking_venue: d.seeking_venue,
            seeking_description: d.seeking_description.clone(),
        })
    }

    pub fn profile(&self) -> Result<ArtistProfile, CoreError> {
        let d = &self.details;
        Ok(ArtistProfile {
            id: self.id,
            name: d.name.clone(),
            genres: d.genre_list()?,
            city: d.city.clone(),
            state: d.state.clone(),
            phone: d.phone.clone(),
            website: d.website.clone(),
            facebook_link: d.facebook_link.clone(),
            seeking_venue: d.seeking_venue,
            seeking_description: d.seeking_description.clone(),
            image_link: d.image_link.clone(),
        })
    }
}

/// Artist as shown on pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistProfile {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

/// Artist directory and home page entry.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn sample_band() -> ArtistForm {
        ArtistForm {
            name: "Sample Band".to_string(),
            genres: vec!["Rock".to_string()],
            city: "X".to_string(),
            state: "Y".to_string(),
            seeking_venue: false,
            ..ArtistForm::default()
        }
    }

    #[test]
    fn from_form_serializes_genres() {
        let details = ArtistDetails::from_form(sample_band()).unwrap();
        assert_eq!(details.genres, r#"["Rock"]"#);
        assert_eq!(details.genre_list().unwrap(), vec!["Rock"]);
        assert!(!details.seeking_venue);
    }

    #[test]
    fn apply_form_returns_new_record() {
        let artist = Artist {
            id: 3,
            details: ArtistDetails::from_form(sample_band()).unwrap(),
            created_at: Utc::now(),
        };
        let mut form = sample_band();
        form.city = "Seattle".to_string();
        form.website_link = Some("https://sample.band".to_string());

        let updated = artist.clone().apply_form(form).unwrap();
        assert_eq!(updated.id, artist.id);
        assert_eq!(updated.details.city, "Seattle");
        assert_eq!(updated.details.website.as_deref(), Some("https://sample.band"));
        assert_eq!(artist.details.city, "X");
    }

    #[test]
    fn profile_round_trips_form_fields() {
        let artist = Artist {
            id: 9,
            details: ArtistDetails::from_form(sample_band()).unwrap(),
            created_at: Utc::now(),
        };
        let profile = artist.profile().unwrap();
        assert_eq!(profile.genres, vec!["Rock"]);
        assert_eq!(artist.to_form().unwrap(), sample_band());
    }
}
