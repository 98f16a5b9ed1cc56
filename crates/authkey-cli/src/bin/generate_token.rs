//! CLI tool to generate an ES256 provider token from an AuthKey .p8 file.

use std::process::ExitCode;

use authkey_cli::{run, Args, Config, IssueOptions, Prompter, MISSING_KEY_FILE};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr; stdout carries prompts and the token.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let Some(options) = IssueOptions::resolve(args, Config::from_env()) else {
        eprintln!("{}", MISSING_KEY_FILE);
        eprintln!("{}", Args::command().render_usage());
        return Ok(ExitCode::from(2));
    };

    let mut prompter = Prompter::stdio();
    run(&options, &mut prompter, Utc::now)?;
    Ok(ExitCode::SUCCESS)
}
