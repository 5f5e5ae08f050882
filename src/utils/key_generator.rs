//! Short key generation.
//!
//! Keys are drawn uniformly from the uppercase base36 alphabet. Random keys
//! can collide, so callers must confirm uniqueness against storage
//! (see [`crate::application::services::UrlService::acquire_unique_key`]).

use rand::Rng;

/// Alphabet used for generated keys (`0-9A-Z`).
pub const KEY_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default number of characters in a generated key.
pub const DEFAULT_KEY_LENGTH: usize = 6;

/// Shortest key length accepted by configuration.
pub const MIN_KEY_LENGTH: usize = 5;

/// Longest key length accepted by configuration.
pub const MAX_KEY_LENGTH: usize = 8;

/// Width of the `urls.short_key` column.
pub const STORED_KEY_WIDTH: usize = 16;

/// Returns whether `key` could name a stored record.
///
/// Keys wider than the column or containing control characters are never
/// stored, so they are not worth a lookup.
pub fn is_lookup_key(key: &str) -> bool {
    !key.is_empty()
        && key.chars().count() <= STORED_KEY_WIDTH
        && !key.chars().any(char::is_control)
}

/// Generates a random key of `length` base36 characters.
///
/// Uses the thread-local CSPRNG from `rand`.
///
/// # Examples
///
/// ```ignore
/// let key = generate_key(6);
/// assert_eq!(key.len(), 6);
/// assert!(key.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
/// ```
pub fn generate_key(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| KEY_ALPHABET[rng.random_range(0..KEY_ALPHABET.len())] as char)
        .collect()
}
