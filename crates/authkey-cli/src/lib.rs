//! AuthKey CLI - provider token generator.
//!
//! Backs the `generate_token` binary: argument and environment handling,
//! operator prompts, and the issuing flow on top of `authkey-core`.

pub mod cli;
pub mod config;
pub mod issue;
pub mod prompt;

pub use cli::{Args, IssueOptions, MISSING_KEY_FILE};
pub use config::Config;
pub use issue::run;
pub use prompt::Prompter;
