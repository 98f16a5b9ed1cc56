//! AuthKey core - provider token construction.
//!
//! Turns an `AuthKey_<KEYID>.p8` private key, a key ID and a team ID into an
//! ES256-signed JWT valid for 90 days. Nothing here prompts or prints.

pub mod claims;
pub mod error;
pub mod key_id;
pub mod token;

pub use claims::{Claims, TOKEN_LIFETIME_SECS};
pub use error::{KeyIdError, Result, TokenError};
pub use key_id::{derive_key_id, AUTH_KEY_PREFIX};
pub use token::{issue, read_private_key, sign, token_header, SignedToken, TokenRequest};
