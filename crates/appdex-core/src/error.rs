//! Error types for appdex-core.
//!
//! Rule violations are *data* (see [`crate::types::Violation`]), not errors.
//! The variants here cover contract violations only: conditions that indicate
//! a structural bug in the catalog rather than a flaw in the document.

use thiserror::Error;

/// Result type alias for Appdex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the Appdex crates.
///
/// Marked `#[non_exhaustive]` to allow adding new error types without
/// breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An entry references a category slug with no matching category.
    #[error("Entry {entry} references unknown category: {category}")]
    UnknownCategory {
        /// Slug of the offending entry
        entry: String,
        /// Category slug that was not found
        category: String,
    },

    /// Configuration error (e.g. an empty title allow-list).
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates a new unknown-category contract error.
    pub fn unknown_category<E, C>(entry: E, category: C) -> Self
    where
        E: Into<String>,
        C: Into<String>,
    {
        Error::UnknownCategory {
            entry: entry.into(),
            category: category.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
