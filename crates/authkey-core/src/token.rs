//! ES256 token signing.
//!
//! The key material is passed through to `jsonwebtoken` untouched; any
//! parsing or algorithm mismatch surfaces as [`TokenError::Signing`].

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::claims::Claims;
use crate::error::{Result, TokenError};

/// Identifiers a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    /// Key ID placed in the `kid` header
    pub key_id: String,
    /// Team ID placed in the `iss` claim
    pub team_id: String,
}

/// A signed compact token and the claims it carries.
#[derive(Debug, Clone)]
pub struct SignedToken {
    pub token: String,
    pub claims: Claims,
}

impl SignedToken {
    /// Expiration timestamp of the token.
    pub fn expires_at(&self) -> i64 {
        self.claims.exp
    }
}

/// Header with `alg` and `kid` only.
pub fn token_header(key_id: &str) -> Header {
    let mut header = Header::new(Algorithm::ES256);
    header.typ = None;
    header.kid = Some(key_id.to_string());
    header
}

/// Read the whole private key file.
pub fn read_private_key(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let key = fs::read(path).map_err(|source| TokenError::KeyFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = key.len(), "Read private key");
    Ok(key)
}

/// Sign `claims` with the PEM-encoded EC private key `key_pem`.
pub fn sign(key_id: &str, claims: Claims, key_pem: &[u8]) -> Result<SignedToken> {
    let key = EncodingKey::from_ec_pem(key_pem)?;
    let token = encode(&token_header(key_id), &claims, &key)?;
    Ok(SignedToken { token, claims })
}

/// Build claims for `request` issued at `issued_at` and sign them.
pub fn issue(
    request: &TokenRequest,
    key_pem: &[u8],
    issued_at: DateTime<Utc>,
) -> Result<SignedToken> {
    let claims = Claims::new(request.team_id.as_str(), issued_at);
    tracing::debug!(kid = %request.key_id, iat = claims.iat, exp = claims.exp, "Signing token");
    sign(&request.key_id, claims, key_pem)
}
