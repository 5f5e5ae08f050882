//! Handler for short key redirects.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::fmt::Write as _;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its origin URL and counts the call.
///
/// # Endpoint
///
/// `GET /urls/{key}` (also served at `GET /{key}`)
///
/// # Response
///
/// `302 Found` with `Location` set to the origin URL.
///
/// # Errors
///
/// Returns 404 `NO_RESULT` if the key does not exist.
pub async fn redirect_handler(
    key: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Path(key) = key?;
    let record = state.url_service.resolve(&key).await?;

    let location = location_header(&record.origin_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Builds a `Location` value, percent-encoding bytes that are not visible ASCII.
fn location_header(url: &str) -> Result<HeaderValue, AppError> {
    let mut encoded = String::with_capacity(url.len());

    for byte in url.bytes() {
        if byte.is_ascii_graphic() {
            encoded.push(byte as char);
        } else {
            let _ = write!(encoded, "%{:02X}", byte);
        }
    }

    HeaderValue::from_str(&encoded)
        .map_err(|e| AppError::internal(format!("Invalid Location header: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_keeps_ascii_url() {
        let value = location_header("https://example.com/path?q=1#top").unwrap();
        assert_eq!(value, "https://example.com/path?q=1#top");
    }

    #[test]
    fn test_location_header_encodes_non_ascii() {
        let value = location_header("https://example.com/café").unwrap();
        assert_eq!(value, "https://example.com/caf%C3%A9");
    }
}
