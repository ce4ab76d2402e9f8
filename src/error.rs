//! Failure taxonomy for the search pipeline.
//!
//! Every variant carries the failing operation and an underlying message so
//! an operator can tell a dead catalog store from a bad document. Per-record
//! parse problems (malformed tag/language JSON) are deliberately absent:
//! those are recovered locally by the loader and never become errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The backing catalog store could not be read. Fatal at startup;
    /// at reload time the previously published index keeps serving.
    #[error("catalog load failed: {0}")]
    Load(String),

    /// The index build could not complete. The whole build is abandoned;
    /// no partial index is ever published.
    #[error("index build failed: {0}")]
    Build(String),

    /// Engine-internal failure while answering a query. Surfaced to the
    /// HTTP caller as a 500 with empty buckets, never a partial 200.
    #[error("query execution failed: {0}")]
    Query(String),
}
