//! Error types for the googser-search crate.
//!
//! Every failure in the fetch/extract loop surfaces as a [`SearchError`].
//! Nothing is retried or recovered locally; the first error aborts the search.

/// Errors that can occur while searching.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The HTTP request for a results page failed at the transport level.
    #[error("network error: {0}")]
    Network(String),

    /// The HTML scanner hit a fatal error while reading a results page.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for googser-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network() {
        let err = SearchError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("memory limit exceeded".into());
        assert_eq!(err.to_string(), "parse error: memory limit exceeded");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("page_count must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "config error: page_count must be greater than 0"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
