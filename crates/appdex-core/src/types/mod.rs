//! Catalog record types.
//!
//! These are the typed records produced by extraction and consumed by the
//! checks: [`AppEntry`], [`Category`], [`RelatedLink`], and the [`Catalog`]
//! that holds them, plus the [`Violation`]/[`RuleKind`] records the checks
//! emit. Records are created fresh on each extraction and never mutated
//! afterwards; validation is read-only.

mod proptests;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog item parsed from the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    /// Display title as written in the document. Non-empty by construction.
    pub name: String,
    /// Normalized, URL-safe identifier derived from `name`.
    ///
    /// Used as the stable identity for ordering comparisons, immune to the
    /// case and whitespace noise of the raw name.
    pub slug: String,
    /// The section the entry was parsed under.
    pub category: Category,
    /// Free-form status text associated with the entry.
    ///
    /// Expected to contain exactly one emoji glyph and no markdown link
    /// syntax; both are checked properties, not invariants.
    pub text: String,
    /// Outbound references found in the entry's block, primary link excluded.
    pub related_links: Vec<RelatedLink>,
    /// Primary URL for the entry, if the entry marker was a hyperlink.
    pub url: Option<String>,
}

/// A category section of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Normalized section identifier, unique per document.
    pub slug: String,
    /// The section heading text as written.
    pub name: String,
}

/// An outbound reference inside an entry's block.
///
/// `href` is not guaranteed to be syntactically valid — validity is a
/// checked property, not an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    /// Anchor text.
    pub label: String,
    /// Target URL.
    pub href: String,
}

/// The full extraction output: categories in order of first appearance and
/// entries in document order, grouped contiguously by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Categories in order of first appearance.
    pub categories: Vec<Category>,
    /// Entries in document order.
    pub entries: Vec<AppEntry>,
}

impl Catalog {
    /// Looks up a category by slug.
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Returns the entries belonging to the given category slug,
    /// in document order.
    pub fn entries_in(&self, category_slug: &str) -> Vec<&AppEntry> {
        self.entries
            .iter()
            .filter(|e| e.category.slug == category_slug)
            .collect()
    }

    /// Returns true when the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The rule a [`Violation`] was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// An entry name appeared more than once in the document.
    DuplicateName,
    /// A related link's href is not a valid absolute http(s) URL.
    InvalidRelatedLink,
    /// Status text contains markdown link syntax.
    MarkdownInStatus,
    /// Status text contains no emoji.
    MissingEmoji,
    /// An entry name contains a character outside the allow-list.
    DisallowedTitleCharacter,
    /// Entries within a category are not in alphabetical order.
    CategoryOrder,
}

impl RuleKind {
    /// Stable kebab-case identifier for the rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::DuplicateName => "duplicate-name",
            RuleKind::InvalidRelatedLink => "invalid-related-link",
            RuleKind::MarkdownInStatus => "markdown-in-status",
            RuleKind::MissingEmoji => "missing-emoji",
            RuleKind::DisallowedTitleCharacter => "disallowed-title-character",
            RuleKind::CategoryOrder => "category-order",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One rule violation found in the document.
///
/// Violations are data about the document, not program errors: the checks
/// enumerate them exhaustively rather than stopping at the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The rule that was violated.
    pub rule: RuleKind,
    /// The offending entry, when the violation is attributable to one.
    pub entry: Option<AppEntry>,
    /// Human-readable description of what is wrong.
    pub detail: String,
}

impl Violation {
    /// Creates a violation attached to an entry.
    pub fn for_entry<S: Into<String>>(rule: RuleKind, entry: &AppEntry, detail: S) -> Self {
        Violation {
            rule,
            entry: Some(entry.clone()),
            detail: detail.into(),
        }
    }

    /// Creates a violation not attributable to a single entry.
    pub fn document<S: Into<String>>(rule: RuleKind, detail: S) -> Self {
        Violation {
            rule,
            entry: None,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule, self.detail)
    }
}
