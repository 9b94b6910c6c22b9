//! googser: retrieve search engine result links from the command line.
//!
//! This crate is the front end over [`googser_search`]: it turns command-line
//! options into a [`Configuration`], runs the paginated search, and writes the
//! result links to a file or standard output.
//!
//! Output is written only after every page has been fetched, so a failed run
//! never leaves partial results behind.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::Configuration;
pub use error::{GoogserError, Result};

/// Search for `term` and write the result links where `config` says.
///
/// # Errors
///
/// Returns [`GoogserError::Search`] if any results page fails, or
/// [`GoogserError::Io`] if the output cannot be opened or written. On a
/// search failure the output file is not touched.
pub async fn run(term: &str, config: &Configuration) -> Result<()> {
    let results = googser_search::search(term, &config.search).await?;
    tracing::debug!(count = results.len(), "search complete");

    match &config.output {
        Some(path) => {
            let file = output::open_output(path)?;
            output::write_results(&results, file)?;
        }
        None => output::write_results(&results, std::io::stdout().lock())?,
    }
    Ok(())
}
