//! Key identifier extraction from `AuthKey_<KEYID>.p8` file names.

use crate::error::KeyIdError;

/// File name prefix used for downloaded provider keys.
pub const AUTH_KEY_PREFIX: &str = "AuthKey_";

/// Returns the last path segment of `path`.
///
/// Splits on `/` as well as the platform separator, so `dir/` yields an
/// empty name rather than `dir`.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', std::path::MAIN_SEPARATOR])
        .next()
        .unwrap_or(path)
}

/// Derive the key identifier from a key file path.
///
/// The identifier is the second `_`-separated segment of the file name, cut
/// at the first `.`:
///
/// ```
/// use authkey_core::derive_key_id;
///
/// assert_eq!(derive_key_id("keys/AuthKey_ABC123.p8").unwrap(), "ABC123");
/// assert_eq!(derive_key_id("AuthKey_AB_CD.p8").unwrap(), "AB");
/// assert!(derive_key_id("private.pem").is_err());
/// ```
pub fn derive_key_id(path: &str) -> Result<String, KeyIdError> {
    let name = file_name(path);
    if !name.starts_with(AUTH_KEY_PREFIX) {
        return Err(KeyIdError::NoMatch);
    }

    // The prefix guarantees a second segment, possibly empty.
    let segment = name.split('_').nth(1).unwrap_or_default();
    let key_id = segment.split('.').next().unwrap_or_default();

    if key_id.is_empty() {
        return Err(KeyIdError::Empty);
    }
    Ok(key_id.to_string())
}
