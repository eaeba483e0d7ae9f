//! Catalog formatting checks for Appdex.
//!
//! Runs the rule checks over an extracted [`Catalog`]: name uniqueness,
//! related-link validity, status-text formatting (one emoji, no markdown),
//! title character set, and per-category alphabetical order.
//!
//! The checks collect every violation rather than stopping at the first —
//! the CI-style "show me everything wrong at once" contract. `Err` is
//! reserved for contract violations: conditions that indicate a broken
//! catalog, not a flawed document.
//!
//! # Example
//!
//! ```rust
//! use appdex_checks::{run_checks, CheckConfig};
//! use appdex_core::Catalog;
//!
//! let catalog = Catalog::default();
//! let violations = run_checks(&catalog, &CheckConfig::default()).unwrap();
//! assert!(violations.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod rules;
pub mod urls;

pub use appdex_core::error::{Error, Result};
pub use config::{CheckConfig, TitleCharset};

use appdex_core::types::{Catalog, Violation};

/// Runs all checks with the default syntactic URL predicate.
pub fn run_checks(catalog: &Catalog, config: &CheckConfig) -> Result<Vec<Violation>> {
    run_checks_with(catalog, config, urls::is_valid_http_url)
}

/// Runs all checks with a caller-supplied URL predicate.
///
/// The predicate is the external collaborator of the related-link rule:
/// it should return true iff the candidate is an acceptable absolute URL.
///
/// Returns `Err` only for contract violations — an entry referencing a
/// category missing from the catalog, or an unusable configuration. Rule
/// violations are returned in the `Ok` list, exhaustively.
pub fn run_checks_with<F>(
    catalog: &Catalog,
    config: &CheckConfig,
    url_ok: F,
) -> Result<Vec<Violation>>
where
    F: Fn(&str) -> bool,
{
    if config.title_charset.is_empty() {
        return Err(Error::config("title allow-list is empty"));
    }
    for entry in &catalog.entries {
        if catalog.category(&entry.category.slug).is_none() {
            return Err(Error::unknown_category(&entry.slug, &entry.category.slug));
        }
    }

    let mut violations = Vec::new();
    rules::check_unique_names(&catalog.entries, &mut violations);
    rules::check_related_links(&catalog.entries, &url_ok, &mut violations);
    rules::check_status_text(&catalog.entries, &mut violations);
    rules::check_title_characters(&catalog.entries, &config.title_charset, &mut violations);
    rules::check_category_order(&catalog.entries, &mut violations);

    log::debug!(
        "checked {} entries, {} violations",
        catalog.entries.len(),
        violations.len()
    );

    Ok(violations)
}
