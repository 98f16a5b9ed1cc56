//! Error types for key identifier extraction and token signing.

use std::path::PathBuf;

/// Crate-wide result type over [`TokenError`].
pub type Result<T> = std::result::Result<T, TokenError>;

/// Reasons a key identifier could not be read from a key file name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyIdError {
    /// The file name does not start with `AuthKey_`.
    #[error("file name does not follow the AuthKey_<KEYID> pattern")]
    NoMatch,

    /// The file name has the prefix but nothing usable after it.
    #[error("file name has an empty key ID segment")]
    Empty,
}

/// Failures while turning a key file into a signed token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The private key file could not be read.
    #[error("failed to read private key file {}", .path.display())]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The key material was rejected by the ES256 signer.
    #[error("failed to sign ES256 token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}
