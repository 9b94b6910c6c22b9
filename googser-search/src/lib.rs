//! # googser-search
//!
//! Paginated web search for googser.
//!
//! This crate fetches search engine result pages one after another, pulls the
//! result links out of each page's HTML, and returns them in fetch order. It
//! needs no API keys: it reads the same HTML a browser would.
//!
//! ## Design
//!
//! - One sequential fetch loop; no concurrent requests
//! - Streaming HTML scan for anchors inside result headings (`<h3 class="r">`)
//! - Randomized 15–40 second pauses between pages, skipped in forced mode
//! - No retries: the first network or parse failure aborts the search
//! - Search terms are logged only at trace level

pub mod config;
pub mod error;
pub mod extractor;
pub mod http;
pub mod orchestrator;
pub mod pacing;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use extractor::ResultExtractor;
pub use http::{HttpFetcher, PageFetcher};
pub use pacing::{Pacer, RandomPacer};

/// Search the web for `term`, fetching `config.page_count` result pages.
///
/// Returns every result link in page order, then in order of appearance on
/// the page. Duplicates are kept.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid, and
/// [`SearchError::Network`] or [`SearchError::Parse`] if any page fails.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> googser_search::Result<()> {
/// let config = googser_search::SearchConfig {
///     page_count: 2,
///     ..Default::default()
/// };
/// for url in googser_search::search("rust programming", &config).await? {
///     println!("{url}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(term: &str, config: &SearchConfig) -> Result<Vec<String>> {
    config.validate()?;
    let fetcher = HttpFetcher::new()?;
    let pacer = RandomPacer::from_config(config);
    orchestrator::search::search_pages(term, config, &fetcher, &pacer).await
}
