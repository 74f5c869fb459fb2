//! # Tally CLI
//!
//! Thin command-line front end over `calc_core`: parses `name=value`
//! fields, runs a calculator and prints the result as text or JSON.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (default `calc_core=info,calc_cli=info`).

mod cli;
mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::Cli;
use crate::error::CliError;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calc_core=info,calc_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            output::render_error(&error, cli.json);
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = commands::load_settings(cli)?;
    let report = commands::run(cli, &settings)?;
    output::render(&report, &settings, cli.json, cli.pretty)
}
