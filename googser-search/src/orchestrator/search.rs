//! Core search loop: fetch each results page, extract links, pace.
//!
//! Fetches `config.page_count` pages one after another, feeding every page
//! through a single reused [`ResultExtractor`] that is reset between pages.
//! Between pages (never after the last) the [`Pacer`] is awaited unless
//! forced mode is on.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::extractor::ResultExtractor;
use crate::http::{PageFetcher, DEFAULT_USER_AGENT};
use crate::pacing::Pacer;

use super::query::{base_query_url, page_url};

/// Run a paginated search with the given fetcher and pacer.
///
/// # Pipeline
///
/// 1. Build the base query URL from `term` and `config.language`
/// 2. For each page, append the `start` offset (pages after the first)
/// 3. Fetch the page and extract its result links
/// 4. Append the links in page order, then reset the extractor
/// 5. Await the pacer between pages unless `config.force` is set
///
/// # Errors
///
/// The first fetch or extraction failure aborts the search and is returned;
/// links gathered from earlier pages are discarded.
pub async fn search_pages<F, P>(
    term: &str,
    config: &SearchConfig,
    fetcher: &F,
    pacer: &P,
) -> Result<Vec<String>, SearchError>
where
    F: PageFetcher,
    P: Pacer,
{
    tracing::trace!(term, pages = config.page_count, "paginated search");

    let base = base_query_url(term, config)?;
    let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);

    let mut extractor = ResultExtractor::new();
    let mut results: Vec<String> = Vec::new();

    for page in 0..config.page_count {
        let uri = page_url(&base, page);
        tracing::debug!(page, "fetching results page");

        let html = fetcher
            .fetch(uri.as_str(), user_agent)
            .await
            .inspect_err(|err| tracing::warn!(page, error = %err, "results page fetch failed"))?;

        extractor
            .feed(&html)
            .inspect_err(|err| tracing::warn!(page, error = %err, "results page scan failed"))?;

        let links = extractor.drain();
        tracing::debug!(page, count = links.len(), "results extracted");
        results.extend(links);
        extractor.reset();

        if should_pause(config, page) {
            pacer.wait().await;
        }
    }

    Ok(results)
}

/// Whether to pause after `page` before fetching the next one.
fn should_pause(config: &SearchConfig, page: usize) -> bool {
    !config.force && config.page_count > 1 && page + 1 != config.page_count
}
