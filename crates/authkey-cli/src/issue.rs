//! The token issuing flow: resolve identifiers, read the key, sign, print.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use authkey_core::{derive_key_id, issue, read_private_key, SignedToken, TokenRequest};
use chrono::{DateTime, Utc};

use crate::cli::IssueOptions;
use crate::prompt::Prompter;

pub const KEY_ID_FALLBACK: &str = "Couldn't extract key ID from filename";
pub const KEY_ID_QUESTION: &str = "Insert key ID: ";
pub const TEAM_ID_QUESTION: &str = "Insert team ID: ";

/// Key ID from options, the file name, or the operator, in that order.
pub fn resolve_key_id<R: BufRead, W: Write>(
    options: &IssueOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<String> {
    if let Some(key_id) = &options.key_id {
        tracing::debug!(%key_id, "Using configured key ID");
        return Ok(key_id.clone());
    }

    match derive_key_id(&options.key_file) {
        Ok(key_id) => {
            tracing::debug!(%key_id, "Derived key ID from file name");
            Ok(key_id)
        }
        Err(e) => {
            tracing::debug!(file = %options.key_file, reason = %e, "Falling back to key ID prompt");
            prompter.say(KEY_ID_FALLBACK)?;
            prompter
                .ask(KEY_ID_QUESTION)
                .context("Failed to read key ID")
        }
    }
}

/// Team ID from options or the operator.
pub fn resolve_team_id<R: BufRead, W: Write>(
    options: &IssueOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<String> {
    match &options.team_id {
        Some(team_id) => Ok(team_id.clone()),
        None => prompter
            .ask(TEAM_ID_QUESTION)
            .context("Failed to read team ID"),
    }
}

/// Issue one token and print it with its expiration timestamp.
///
/// `now` is read once, after the identifiers are known and the key is loaded.
pub fn run<R: BufRead, W: Write>(
    options: &IssueOptions,
    prompter: &mut Prompter<R, W>,
    now: impl FnOnce() -> DateTime<Utc>,
) -> Result<SignedToken> {
    let key_id = resolve_key_id(options, prompter)?;
    let team_id = resolve_team_id(options, prompter)?;

    let key = read_private_key(&options.key_file)?;
    let request = TokenRequest { key_id, team_id };
    let signed = issue(&request, &key, now())?;

    prompter.say(&format!("JWT Token: {}", signed.token))?;
    prompter.say(&format!("Expiration timestamp: {}", signed.expires_at()))?;

    tracing::info!(kid = %request.key_id, exp = signed.expires_at(), "Issued token");
    Ok(signed)
}
