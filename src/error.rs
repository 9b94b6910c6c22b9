//! Error types for the googser command.

use googser_search::SearchError;

/// Top-level error type for a googser run.
#[derive(Debug, thiserror::Error)]
pub enum GoogserError {
    /// Malformed or missing command-line input.
    #[error("{0}")]
    OptArg(String),

    /// Fetching or scanning a results page failed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Opening or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GoogserError {
    /// Process exit status for this error.
    ///
    /// Option errors exit with 2; search and I/O failures exit with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::OptArg(_) => 2,
            Self::Search(_) | Self::Io(_) => 1,
        }
    }
}

/// Convenience type alias for googser results.
pub type Result<T> = std::result::Result<T, GoogserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_opt_arg_is_bare_message() {
        let err = GoogserError::OptArg("No search term provided".into());
        assert_eq!(err.to_string(), "No search term provided");
    }

    #[test]
    fn display_search_is_transparent() {
        let err = GoogserError::from(SearchError::Network("connection refused".into()));
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn display_io() {
        let err = GoogserError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.to_string(), "I/O error: denied");
    }

    #[test]
    fn exit_codes() {
        assert_eq!(GoogserError::OptArg("bad".into()).exit_code(), 2);
        assert_eq!(
            GoogserError::from(SearchError::Parse("bad".into())).exit_code(),
            1
        );
        assert_eq!(
            GoogserError::from(std::io::Error::other("bad")).exit_code(),
            1
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GoogserError>();
    }
}
