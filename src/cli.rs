//! Command-line interface definition.

use crate::config::Configuration;
use crate::error::GoogserError;
use clap::{ArgAction, Parser};
use googser_search::SearchConfig;
use googser_search::config::DEFAULT_LANGUAGE;
use std::path::PathBuf;

/// Hint printed after an option error.
pub const USAGE_REFERENCE: &str = "Try 'googser --help' for more information.";

/// Text shown after the program name by `--version`.
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright (C) 2012 Dennis Hedback"
);

/// Retrieves Google results for SEARCH TERM to file or standard output.
#[derive(Debug, Parser)]
#[command(
    name = "googser",
    version,
    long_version = LONG_VERSION,
    override_usage = "googser [OPTION]... [SEARCH TERM]",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// No human behaviour, faster -- use at own risk.
    #[arg(short, long)]
    pub force: bool,

    /// Search language.
    #[arg(short, long, value_name = "L", default_value = DEFAULT_LANGUAGE)]
    pub lang: String,

    /// Number of pages to fetch instead of default number (1).
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub number: Option<i64>,

    /// Appends results to file, creates file if it doesn't exist.
    #[arg(short, long, value_name = "F")]
    pub output: Option<PathBuf>,

    /// Display this help and exit.
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,

    /// Output version information and exit.
    #[arg(long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Words of the search term, joined with spaces.
    #[arg(value_name = "SEARCH TERM")]
    pub terms: Vec<String>,
}

impl Cli {
    /// Turn parsed arguments into the search term and run configuration.
    ///
    /// A page count of 1 or less is ignored and the default of one page kept.
    ///
    /// # Errors
    ///
    /// Returns [`GoogserError::OptArg`] if no search term was given or the
    /// resulting configuration is invalid.
    pub fn into_config(self) -> Result<(String, Configuration), GoogserError> {
        if self.terms.is_empty() {
            return Err(GoogserError::OptArg("No search term provided".into()));
        }

        let mut search = SearchConfig {
            force: self.force,
            language: self.lang,
            ..Default::default()
        };
        if let Some(n) = self.number.filter(|n| *n > 1) {
            search.page_count = usize::try_from(n)
                .map_err(|_| GoogserError::OptArg(format!("page count {n} is too large")))?;
        }
        search
            .validate()
            .map_err(|e| GoogserError::OptArg(e.to_string()))?;

        let config = Configuration {
            search,
            output: self.output,
        };
        Ok((self.terms.join(" "), config))
    }
}
