//! The individual rule checks.
//!
//! Each check is a pure function over the entry list that appends to a
//! shared accumulator. No check short-circuits another: every entry is
//! checked against every rule, and every violation found is reported.

use appdex_core::types::{AppEntry, RuleKind, Violation};
use regex::Regex;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::config::TitleCharset;

/// Reports each repeated occurrence of an entry name.
///
/// Name equality is exact-string; no normalization. One duplicated pair
/// yields exactly one violation (the second occurrence reports).
pub fn check_unique_names(entries: &[AppEntry], out: &mut Vec<Violation>) {
    let mut seen: HashSet<&str> = HashSet::new();
    for entry in entries {
        if !seen.insert(&entry.name) {
            out.push(Violation::for_entry(
                RuleKind::DuplicateName,
                entry,
                format!("Duplicate app found: {}", entry.name),
            ));
        }
    }
}

/// Reports every related link whose href fails the URL predicate.
pub fn check_related_links<F>(entries: &[AppEntry], url_ok: &F, out: &mut Vec<Violation>)
where
    F: Fn(&str) -> bool,
{
    for entry in entries {
        for link in &entry.related_links {
            if !url_ok(&link.href) {
                out.push(Violation::for_entry(
                    RuleKind::InvalidRelatedLink,
                    entry,
                    format!(
                        "App {} does not have a valid related link url: {}",
                        entry.name, link.href
                    ),
                ));
            }
        }
    }
}

/// Reports status text containing markdown link syntax, and status text
/// with no emoji.
///
/// The `](` substring is the heuristic marker for embedded link syntax;
/// emoji presence is probed with the Unicode `Extended_Pictographic` class.
pub fn check_status_text(entries: &[AppEntry], out: &mut Vec<Violation>) {
    let emoji_re =
        Regex::new(r"\p{Extended_Pictographic}").expect("Invalid emoji class regex");

    for entry in entries {
        if entry.text.contains("](") {
            out.push(Violation::for_entry(
                RuleKind::MarkdownInStatus,
                entry,
                format!("App {} has markdown in status text", entry.name),
            ));
        }
        if !emoji_re.is_match(&entry.text) {
            out.push(Violation::for_entry(
                RuleKind::MissingEmoji,
                entry,
                format!("App {} does not have an emoji in status text", entry.name),
            ));
        }
    }
}

/// Reports every character of an entry name outside the allow-list,
/// citing the character and its code point so later tooling can localize
/// the offender.
pub fn check_title_characters(
    entries: &[AppEntry],
    charset: &TitleCharset,
    out: &mut Vec<Violation>,
) {
    for entry in entries {
        for c in entry.name.chars() {
            if !charset.allows(c) {
                out.push(Violation::for_entry(
                    RuleKind::DisallowedTitleCharacter,
                    entry,
                    format!(
                        "App title {} has disallowed character {} (U+{:04X})",
                        entry.name, c, c as u32
                    ),
                ));
            }
        }
    }
}

/// Locale-aware name comparison: primary on lowercased text, ties broken
/// by the original text.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Reports out-of-order entries within each category group.
///
/// Groups follow the order of first appearance. Within a group the actual
/// order is compared position by position against the locale-aware sort of
/// names; entries are identified by slug so cosmetic name differences do
/// not mask or fake mismatches. A swapped pair is reported once, not once
/// per position it disturbs.
pub fn check_category_order(entries: &[AppEntry], out: &mut Vec<Violation>) {
    let mut group_order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&AppEntry>> = HashMap::new();

    for entry in entries {
        let category_slug = entry.category.slug.as_str();
        let group = groups.entry(category_slug).or_default();
        if group.is_empty() {
            group_order.push(category_slug);
        }
        group.push(entry);
    }

    for category_slug in group_order {
        let actual = &groups[category_slug];
        let mut expected = actual.clone();
        expected.sort_by(|a, b| locale_cmp(&a.name, &b.name));

        let mut cited: HashSet<(&str, &str)> = HashSet::new();
        for (index, (got, want)) in actual.iter().zip(&expected).enumerate() {
            if got.slug == want.slug {
                continue;
            }
            let pair = if got.slug.as_str() <= want.slug.as_str() {
                (got.slug.as_str(), want.slug.as_str())
            } else {
                (want.slug.as_str(), got.slug.as_str())
            };
            if !cited.insert(pair) {
                continue;
            }
            out.push(Violation::for_entry(
                RuleKind::CategoryOrder,
                got,
                format!(
                    "App at index {index} of {category_slug} is {} but should be {}",
                    got.name, want.name
                ),
            ));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
