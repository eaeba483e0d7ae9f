//! Auxiliary metadata for extraction.
//!
//! The extractor takes all of its inputs as explicit arguments; there is no
//! ambient state. [`ExtractContext`] carries the optional historical
//! metadata that some heuristics consult (recovering the primary URL of a
//! stale entry from a prior scan). A default, empty context is always valid:
//! no heuristic is required for correctness.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Optional historical metadata consulted during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractContext {
    /// Prior scan results, keyed by entry slug.
    ///
    /// Consulted only when an entry has no primary URL of its own, to
    /// recover the last URL a previous scan recorded for that slug.
    pub historical_scans: HashMap<String, ScanRecord>,

    /// Commit history of the document, newest first.
    ///
    /// Accepted for parity with the wider pipeline; extraction does not
    /// depend on it.
    pub commits: Vec<CommitRef>,
}

impl ExtractContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prior scan record, keyed by its slug.
    pub fn with_scan(mut self, record: ScanRecord) -> Self {
        self.historical_scans.insert(record.slug.clone(), record);
        self
    }
}

/// The result of a prior scan for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Slug of the entry the scan covered.
    pub slug: String,
    /// Primary URL recorded by the scan, if any.
    pub url: Option<String>,
}

impl ScanRecord {
    /// Creates a scan record.
    pub fn new<S: Into<String>>(slug: S, url: Option<String>) -> Self {
        ScanRecord {
            slug: slug.into(),
            url,
        }
    }
}

/// A reference to one commit touching the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRef {
    /// Commit hash.
    pub sha: String,
    /// Commit subject line.
    pub message: String,
}
