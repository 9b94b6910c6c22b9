//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls how many result pages are fetched, whether the
//! delay between pages is skipped, the search language, and the request
//! identity. The defaults match a single polite query against Google.

use crate::error::SearchError;
use url::Url;

/// Default results endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.google.com/search";

/// Default search language.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Configuration for a paginated search.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of result pages to fetch, ten results per page.
    pub page_count: usize,
    /// Skip the randomized delay between pages.
    pub force: bool,
    /// Search language code sent as the `hl` query parameter.
    pub language: String,
    /// Results endpoint the query string is appended to.
    pub base_url: String,
    /// Custom User-Agent string. If `None`, the built-in browser
    /// User-Agent is sent.
    pub user_agent: Option<String>,
    /// Half-open range in seconds `[min, max)` the pause between pages is
    /// drawn from.
    pub pacing_secs: (u64, u64),
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_count: 1,
            force: false,
            language: DEFAULT_LANGUAGE.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: None,
            pacing_secs: (15, 40),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `page_count` must be greater than 0
    /// - `language` must not be empty
    /// - `base_url` must be an absolute URL
    /// - `pacing_secs.0` must be < `pacing_secs.1`
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.page_count == 0 {
            return Err(SearchError::Config(
                "page_count must be greater than 0".into(),
            ));
        }
        if self.language.trim().is_empty() {
            return Err(SearchError::Config("language must not be empty".into()));
        }
        Url::parse(&self.base_url)
            .map_err(|e| SearchError::Config(format!("invalid base_url: {e}")))?;
        if self.pacing_secs.0 >= self.pacing_secs.1 {
            return Err(SearchError::Config(
                "pacing_secs min must be < max".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SearchConfig::default();
        assert_eq!(config.page_count, 1);
        assert!(!config.force);
        assert_eq!(config.language, "en");
        assert_eq!(config.base_url, "https://www.google.com/search");
        assert!(config.user_agent.is_none());
        assert_eq!(config.pacing_secs, (15, 40));
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_page_count_rejected() {
        let config = SearchConfig {
            page_count: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page_count"));
    }

    #[test]
    fn empty_language_rejected() {
        let config = SearchConfig {
            language: "  ".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("language"));
    }

    #[test]
    fn relative_base_url_rejected() {
        let config = SearchConfig {
            base_url: "/search".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn empty_pacing_range_rejected() {
        let config = SearchConfig {
            pacing_secs: (20, 20),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pacing"));
    }

    #[test]
    fn custom_user_agent() {
        let config = SearchConfig {
            user_agent: Some("CustomBot/1.0".into()),
            ..Default::default()
        };
        assert_eq!(config.user_agent.as_deref(), Some("CustomBot/1.0"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn many_pages_forced_valid() {
        let config = SearchConfig {
            page_count: 25,
            force: true,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
