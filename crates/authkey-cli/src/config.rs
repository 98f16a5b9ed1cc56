//! Token defaults from environment.

use std::env;

pub const KEY_ID_VAR: &str = "AUTHKEY_KEY_ID";
pub const TEAM_ID_VAR: &str = "AUTHKEY_TEAM_ID";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub key_id: Option<String>,
    pub team_id: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            key_id: non_blank(KEY_ID_VAR),
            team_id: non_blank(TEAM_ID_VAR),
        }
    }
}
