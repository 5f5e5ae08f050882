//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The origin URL (`http`, `https` or `chrome`, at most 500 characters).
    pub url: String,
}

/// Response carrying the public short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
