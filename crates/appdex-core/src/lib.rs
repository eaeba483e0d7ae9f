//! Appdex Core — shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all Appdex crates.
//! It has no internal Appdex dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Catalog record types (`AppEntry`, `Category`, `Violation`, ...)
//! - [`util`]: Slug/ID utilities

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod types;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use types::{AppEntry, Catalog, Category, RelatedLink, RuleKind, Violation};
pub use util::ids::slug;
