//! Results page URL construction.
//!
//! The search term is form-encoded (space becomes `+`, reserved characters
//! are percent-encoded) and appended to the configured endpoint together with
//! the language, which goes in as given. Pages after the first carry a
//! `start` offset.

use crate::config::SearchConfig;
use crate::error::SearchError;
use url::{form_urlencoded, Url};

/// Number of results on one page; the pagination offset step.
pub const RESULTS_PER_PAGE: usize = 10;

/// Build the query URL for the first results page.
///
/// `config.language` is inserted verbatim as the `hl` value; only characters
/// that can never appear in a query (spaces, `#`, quotes) get percent-encoded.
/// The term is always form-encoded.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config.base_url` is not a valid URL.
pub fn base_query_url(term: &str, config: &SearchConfig) -> Result<Url, SearchError> {
    let mut url = Url::parse(&config.base_url)
        .map_err(|e| SearchError::Config(format!("invalid base_url: {e}")))?;

    let term: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
    let query = match url.query() {
        Some(existing) if !existing.is_empty() => {
            format!("{existing}&hl={}&q={term}", config.language)
        }
        _ => format!("hl={}&q={term}", config.language),
    };
    url.set_query(Some(&query));
    Ok(url)
}

/// URL for the zero-based results page `page`.
pub fn page_url(base: &Url, page: usize) -> Url {
    let mut url = base.clone();
    if page > 0 {
        url.query_pairs_mut()
            .append_pair("start", &(page * RESULTS_PER_PAGE).to_string());
    }
    url
}
