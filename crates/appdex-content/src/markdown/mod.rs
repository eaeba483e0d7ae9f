//! Markdown extraction internals.
//!
//! - [`extractor`]: the event-stream pass that builds the catalog
//! - [`context`]: optional historical metadata some heuristics consult

pub mod context;
pub mod extractor;
mod proptests;

// Re-export key types and functions
pub use context::{CommitRef, ExtractContext, ScanRecord};
pub use extractor::extract;
