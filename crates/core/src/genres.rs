//! Genre tags and their stored representation.
//!
//! Venues and artists carry an ordered list of genre tags. The list is
//! persisted as a JSON array in a single text column and decoded on read.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Genres offered as suggestions on the listing forms.
///
/// Submitted genres are not restricted to this list.
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Maximum number of genre tags on a single listing.
pub const MAX_GENRES: usize = 20;

/// Maximum length of a single genre tag, in characters.
pub const MAX_GENRE_LEN: usize = 50;

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Encode a genre list into its stored text form.
pub fn serialize_genres(genres: &[String]) -> Result<String, CoreError> {
    serde_json::to_string(genres)
        .map_err(|e| CoreError::Internal(format!("failed to encode genres: {e}")))
}

/// Decode a stored genre column back into an ordered list.
///
/// A column that is not a JSON array of strings is treated as corrupt data.
pub fn deserialize_genres(raw: &str) -> Result<Vec<String>, CoreError> {
    serde_json::from_str(raw)
        .map_err(|e| CoreError::Internal(format!("stored genres are not valid: {e}")))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a submitted genre list.
///
/// At least one tag is required, tags must be non-blank, at most
/// [`MAX_GENRE_LEN`] characters, and case-insensitively unique.
pub fn validate_genres(genres: &[String]) -> Result<(), CoreError> {
    if genres.is_empty() {
        return Err(CoreError::Validation(
            "at least one genre is required".to_string(),
        ));
    }
    if genres.len() > MAX_GENRES {
        return Err(CoreError::Validation(format!(
            "at most {MAX_GENRES} genres are allowed, got {}",
            genres.len()
        )));
    }

    let mut seen: Vec<String> = Vec::with_capacity(genres.len());
    for genre in genres {
        let trimmed = genre.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("genre must not be blank".to_string()));
        }
        if trimmed.chars().count() > MAX_GENRE_LEN {
            return Err(CoreError::Validation(format!(
                "genre '{trimmed}' exceeds {MAX_GENRE_LEN} characters"
            )));
        }
        let folded = trimmed.to_lowercase();
        if seen.contains(&folded) {
            return Err(CoreError::Validation(format!(
                "genre '{trimmed}' is listed more than once"
            )));
        }
        seen.push(folded);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn round_trip_preserves_order() {
        let genres = tags(&["Jazz", "Blues"]);
        let stored = serialize_genres(&genres).unwrap();
        assert_eq!(stored, r#"["Jazz","Blues"]"#);
        assert_eq!(deserialize_genres(&stored).unwrap(), genres);
    }

    #[test]
    fn empty_list_round_trips() {
        let stored = serialize_genres(&[]).unwrap();
        assert_eq!(deserialize_genres(&stored).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn corrupt_column_is_internal_error() {
        assert_matches!(deserialize_genres("Jazz, Blues"), Err(CoreError::Internal(_)));
        assert_matches!(deserialize_genres(r#"{"a":1}"#), Err(CoreError::Internal(_)));
    }

    #[test]
    fn accepts_genres_outside_choices() {
        assert!(validate_genres(&tags(&["Rock"])).is_ok());
    }

    #[test]
    fn rejects_empty_list() {
        assert_matches!(validate_genres(&[]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_blank_genre() {
        assert!(validate_genres(&tags(&["Jazz", "  "])).is_err());
    }

    #[test]
    fn rejects_duplicate_genre_ignoring_case() {
        assert!(validate_genres(&tags(&["Jazz", "jazz"])).is_err());
    }

    #[test]
    fn rejects_overlong_genre() {
        let long = "x".repeat(MAX_GENRE_LEN + 1);
        assert!(validate_genres(&[long]).is_err());
    }

    #[test]
    fn rejects_too_many_genres() {
        let many: Vec<String> = (0..=MAX_GENRES).map(|i| format!("g{i}")).collect();
        assert!(validate_genres(&many).is_err());
    }

    #[test]
    fn choices_are_valid_genres() {
        let all: Vec<String> = GENRE_CHOICES.iter().map(|g| g.to_string()).collect();
        assert!(validate_genres(&all).is_ok());
    }
}
