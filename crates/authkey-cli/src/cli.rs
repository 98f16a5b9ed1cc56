//! Command-line arguments.

use clap::Parser;

use crate::config::Config;

/// Message printed when no key file is given.
pub const MISSING_KEY_FILE: &str = "Pass the .p8 file as the argument";

/// Generate an ES256 provider token from an AuthKey .p8 file
#[derive(Parser, Debug)]
#[command(name = "generate_token", author, version, about)]
pub struct Args {
    /// Path to the PEM-encoded EC private key (AuthKey_<KEYID>.p8)
    pub key_file: Option<String>,

    /// Key ID (defaults to the one in the file name, or asks)
    #[arg(long)]
    pub key_id: Option<String>,

    /// Team ID used as the token issuer (asks when not given)
    #[arg(long)]
    pub team_id: Option<String>,
}

/// Everything needed to issue one token. Missing identifiers are prompted for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueOptions {
    pub key_file: String,
    pub key_id: Option<String>,
    pub team_id: Option<String>,
}

impl IssueOptions {
    /// Merge flags over environment defaults. `None` when no key file was given.
    pub fn resolve(args: Args, config: Config) -> Option<Self> {
        let key_file = args.key_file?;
        Some(Self {
            key_file,
            key_id: args.key_id.or(config.key_id),
            team_id: args.team_id.or(config.team_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_missing_key_file_resolves_to_none() {
        let args = Args::try_parse_from(["generate_token"]).unwrap();
        assert!(IssueOptions::resolve(args, Config::default()).is_none());
    }

    #[test]
    fn test_flags_override_environment() {
        let args = Args::try_parse_from([
            "generate_token",
            "--team-id",
            "FLAGTEAM",
            "keys/AuthKey_ABC.p8",
        ])
        .unwrap();
        let config = Config {
            key_id: Some("ENVKEY".to_string()),
            team_id: Some("ENVTEAM".to_string()),
        };

        let options = IssueOptions::resolve(args, config).unwrap();
        assert_eq!(options.key_file, "keys/AuthKey_ABC.p8");
        assert_eq!(options.key_id.as_deref(), Some("ENVKEY"));
        assert_eq!(options.team_id.as_deref(), Some("FLAGTEAM"));
    }

    #[test]
    fn test_usage_names_the_binary() {
        let usage = Args::command().render_usage().to_string();
        assert!(usage.contains("generate_token"), "usage was: {usage}");
    }

    #[test]
    fn test_rejects_extra_positionals() {
        assert!(Args::try_parse_from(["generate_token", "a.p8", "b.p8"]).is_err());
    }
}
