//! Markdown catalog extraction for Appdex.
//!
//! This crate turns a semi-structured markdown document — a README acting as
//! a curated catalog — into the typed [`Catalog`](appdex_core::Catalog) the
//! checks crate consumes. Extraction is a single left-to-right pass over the
//! document, tolerant of loose, human-edited markdown: malformed input
//! produces incomplete or missing records, never a failure.
//!
//! # Example
//!
//! ```rust
//! use appdex_content::markdown::{extract, ExtractContext};
//!
//! let readme = "\
//! ### Music
//!
//! - [Ableton Live](https://www.ableton.com) - ✅ Native support
//! ";
//!
//! let catalog = extract(readme, &ExtractContext::default());
//! assert_eq!(catalog.entries.len(), 1);
//! assert_eq!(catalog.entries[0].name, "Ableton Live");
//! assert_eq!(catalog.entries[0].category.slug, "music");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod markdown;

// Re-export the extraction entry points at crate root for convenience
pub use markdown::{extract, CommitRef, ExtractContext, ScanRecord};
