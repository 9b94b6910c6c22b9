//! Run configuration for the googser command.

use googser_search::SearchConfig;
use std::path::PathBuf;

/// Everything one run needs besides the search term.
///
/// Built once from the command line and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    /// Page count, forced mode, language and request settings.
    pub search: SearchConfig,
    /// File the results are appended to. `None` writes to standard output.
    pub output: Option<PathBuf>,
}
