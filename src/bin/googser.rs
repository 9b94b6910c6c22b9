//! googser binary: print search result links for a search term.
//!
//! Results go to standard output (or the `--output` file); all tracing output
//! goes to stderr so stdout stays a clean list of URLs.

use clap::Parser;
use googser::cli::USAGE_REFERENCE;
use googser::{Cli, GoogserError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("googser=warn,googser_search=warn")),
        )
        .init();

    // Help, version and malformed options exit here with status 0 or 2.
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            if matches!(err, GoogserError::OptArg(_)) {
                eprintln!("{USAGE_REFERENCE}");
            }
            tracing::debug!(error = %err, "googser exited with error");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> googser::Result<()> {
    let (term, config) = cli.into_config()?;
    googser::run(&term, &config).await
}
