//! Origin URL validation.
//!
//! Both checks are pure. Format is checked before length so that a long
//! string that is not a URL at all is reported as "not a URL".

use regex::Regex;
use std::sync::LazyLock;

/// Maximum accepted length of an origin URL, in characters.
pub const MAX_URL_LENGTH: usize = 500;

/// Accepts `http`, `https` and `chrome` URLs with a non-empty body.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?|chrome)://[^\s$.?#].[^\s]*$").expect("URL regex is valid")
});

/// Reason an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This is not url.")]
    NotUrl,

    #[error("The url is too long. (over {max} in length)")]
    TooLong { max: usize },

    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

/// Returns whether `url` looks like an `http`, `https` or `chrome` URL.
///
/// Control characters (NUL included) are never part of a URL.
pub fn is_valid_url(url: &str) -> bool {
    !url.chars().any(char::is_control) && URL_REGEX.is_match(url)
}

/// Returns whether `url` fits within [`MAX_URL_LENGTH`] characters.
pub fn check_url_length(url: &str) -> bool {
    url.chars().count() <= MAX_URL_LENGTH
}

/// Validates an origin URL submitted for shortening.
///
/// # Errors
///
/// - [`ValidationError::NotUrl`] if the scheme pattern does not match
/// - [`ValidationError::TooLong`] if the URL exceeds [`MAX_URL_LENGTH`]
pub fn validate_origin_url(url: &str) -> Result<(), ValidationError> {
    if !is_valid_url(url) {
        return Err(ValidationError::NotUrl);
    }

    if !check_url_length(url) {
        return Err(ValidationError::TooLong {
            max: MAX_URL_LENGTH,
        });
    }

    Ok(())
}
