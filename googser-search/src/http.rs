//! HTTP fetching of search result pages.
//!
//! [`PageFetcher`] is the seam the orchestrator fetches through;
//! [`HttpFetcher`] is the real implementation over a shared
//! [`reqwest::Client`] with browser-like identity and cookie support.

use crate::error::SearchError;
use reqwest::header::USER_AGENT;

/// Browser User-Agent sent with every results page request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.1; rv:10.0) Gecko/20100101 Firefox/10.0";

/// Fetches one results page as text.
///
/// All implementations must be `Send + Sync` so a searcher can be shared.
pub trait PageFetcher: Send + Sync {
    /// GET `uri` identifying as `user_agent` and return the decoded body.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Network`] on any transport failure, including
    /// non-success status codes and bodies that are not valid UTF-8.
    fn fetch(
        &self,
        uri: &str,
        user_agent: &str,
    ) -> impl std::future::Future<Output = Result<String, SearchError>> + Send;
}

/// Build a [`reqwest::Client`] configured for results page scraping.
///
/// The client has:
/// - Cookie store enabled (for consent pages between result pages)
/// - Brotli and gzip decompression
/// - At most 10 redirects
///
/// Timeouts are left at the transport defaults.
///
/// # Errors
///
/// Returns [`SearchError::Network`] if the client cannot be constructed.
pub fn build_client() -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Network(format!("failed to build HTTP client: {e}")))
}

/// [`PageFetcher`] backed by a real HTTP client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a freshly built client.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Network`] if the client cannot be constructed.
    pub fn new() -> Result<Self, SearchError> {
        Ok(Self {
            client: build_client()?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, uri: &str, user_agent: &str) -> Result<String, SearchError> {
        let response = self
            .client
            .get(uri)
            .header(USER_AGENT, user_agent)
            .header("Accept", "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(|e| SearchError::Network(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Network(format!("HTTP error: {e}")))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Network(format!("response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "results page received");

        String::from_utf8(body.to_vec())
            .map_err(|e| SearchError::Network(format!("response is not valid UTF-8: {e}")))
    }
}
