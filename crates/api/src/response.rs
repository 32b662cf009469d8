//! Shared response envelope for page handlers.
//!
//! All responses use a `{ "data": ... }` envelope. Pages that follow a
//! form submission add a `message` with the notice to show the user.

use serde::Serialize;

/// Standard `{ "data": T, "message"?: String }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::with_message(venue, "Venue saved")))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}
