//! Search orchestrator: query URLs, sequential page fetches, pacing.
//!
//! Pages are fetched strictly one after another. Each page's markup goes
//! through a single reused [`crate::extractor::ResultExtractor`], and the
//! links are accumulated in fetch order without deduplication.

pub mod query;
pub mod search;
