//! Catalog extraction from markdown.
//!
//! One pass over the `pulldown-cmark` event stream, folding headings, list
//! items, and inline links into [`AppEntry`] records:
//!
//! - an H2 heading opens a new [`Category`] and closes the previous one;
//!   an H1 heading is document-title context and closes any open category
//! - inside a category, an H3+ sub-heading or a top-level list item opens a
//!   new entry; the marker's own hyperlink (if any) supplies the name and
//!   primary URL
//! - other inline links in the entry's block become related links, and the
//!   remaining plain text becomes the entry's status text
//!
//! Content that appears before the first category heading belongs to no
//! category and is not emitted. Malformed inline syntax degrades to plain
//! text (the event stream already surfaces it as `Text`); extraction never
//! fails.

use appdex_core::types::{AppEntry, Catalog, Category, RelatedLink};
use appdex_core::util::ids::slug;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};

use crate::markdown::context::ExtractContext;

/// Which markdown construct opened an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    /// An H3+ sub-heading. List items in the block feed the entry.
    Heading,
    /// A top-level list item. The next top-level item starts a new entry.
    Item,
}

/// An entry being assembled. Dropped silently if its name resolves empty.
#[derive(Debug)]
struct Draft {
    marker: Marker,
    category: Category,
    /// For item drafts without a primary link this accumulates the item's
    /// plain text; for all other drafts it is fixed at creation.
    name: String,
    url: Option<String>,
    text: String,
    related_links: Vec<RelatedLink>,
    has_primary: bool,
}

impl Draft {
    fn item(category: Category) -> Self {
        Draft {
            marker: Marker::Item,
            category,
            name: String::new(),
            url: None,
            text: String::new(),
            related_links: Vec::new(),
            has_primary: false,
        }
    }

    fn heading(category: Category, name: String, url: Option<String>) -> Self {
        Draft {
            marker: Marker::Heading,
            category,
            name,
            url,
            text: String::new(),
            related_links: Vec::new(),
            has_primary: true,
        }
    }
}

/// An inline link being assembled between `Start(Link)` and `End(Link)`.
#[derive(Debug)]
struct LinkDraft {
    href: String,
    label: String,
}

/// Extracts the catalog from a markdown document.
///
/// A single left-to-right pass; deterministic (identical input and context
/// yield byte-identical output), no I/O, and infallible — malformed input
/// produces empty or partial records, never an error.
///
/// The `context` is optional metadata: an empty
/// [`ExtractContext::default()`] yields the same entries except that missing
/// primary URLs are not backfilled from prior scans.
pub fn extract(markdown: &str, context: &ExtractContext) -> Catalog {
    let mut categories: Vec<Category> = Vec::new();
    let mut entries: Vec<AppEntry> = Vec::new();

    let mut current_category: Option<Category> = None;
    let mut draft: Option<Draft> = None;

    // Inline state
    let mut in_heading: Option<HeadingLevel> = None;
    let mut heading_text = String::new();
    let mut heading_links: Vec<LinkDraft> = Vec::new();
    let mut open_link: Option<LinkDraft> = None;
    let mut item_depth: usize = 0;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading(level, _, _)) => {
                // Any heading ends the previous entry's block.
                finalize(&mut draft, &mut entries, context);
                in_heading = Some(level);
                heading_text.clear();
                heading_links.clear();
                open_link = None;
            }
            Event::End(Tag::Heading(level, _, _)) => {
                in_heading = None;
                match level {
                    HeadingLevel::H1 => {
                        // Document title: closes any category, opens none.
                        current_category = None;
                    }
                    HeadingLevel::H2 => {
                        current_category = open_category(
                            &mut categories,
                            heading_text.trim(),
                        );
                        if current_category.is_none() {
                            log::trace!("empty category heading skipped");
                        }
                    }
                    _ => {
                        if let Some(category) = &current_category {
                            draft = heading_entry(
                                category.clone(),
                                heading_text.trim(),
                                &mut heading_links,
                            );
                        } else {
                            log::trace!(
                                "sub-heading outside any category skipped: {}",
                                heading_text.trim()
                            );
                        }
                    }
                }
            }

            Event::Start(Tag::Item) => {
                item_depth += 1;
                if item_depth == 1 {
                    if let Some(category) = &current_category {
                        // A top-level item starts a new entry, unless the
                        // open entry came from a sub-heading; then the item
                        // (e.g. a related-links list) is part of its block.
                        let feeds_heading_entry = draft
                            .as_ref()
                            .is_some_and(|d| d.marker == Marker::Heading);
                        if !feeds_heading_entry {
                            finalize(&mut draft, &mut entries, context);
                            draft = Some(Draft::item(category.clone()));
                        }
                    }
                }
            }
            Event::End(Tag::Item) => {
                item_depth = item_depth.saturating_sub(1);
                if let Some(d) = draft.as_mut() {
                    pad(active_text(d));
                }
            }

            Event::Start(Tag::Link(_, dest, _)) => {
                open_link = Some(LinkDraft {
                    href: dest.to_string(),
                    label: String::new(),
                });
            }
            Event::End(Tag::Link(_, _, _)) => {
                if let Some(link) = open_link.take() {
                    if in_heading.is_some() {
                        heading_links.push(link);
                    } else if let Some(d) = draft.as_mut() {
                        attach_link(d, link);
                    }
                    // Links outside any entry block are dropped.
                }
            }

            Event::Text(t) | Event::Code(t) => {
                if in_heading.is_some() {
                    heading_text.push_str(&t);
                    if let Some(link) = open_link.as_mut() {
                        link.label.push_str(&t);
                    }
                } else if let Some(link) = open_link.as_mut() {
                    link.label.push_str(&t);
                } else if let Some(d) = draft.as_mut() {
                    active_text(d).push_str(&t);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_heading.is_some() {
                    pad(&mut heading_text);
                } else if let Some(link) = open_link.as_mut() {
                    pad(&mut link.label);
                } else if let Some(d) = draft.as_mut() {
                    pad(active_text(d));
                }
            }
            Event::End(Tag::Paragraph) => {
                if in_heading.is_none() {
                    if let Some(d) = draft.as_mut() {
                        pad(active_text(d));
                    }
                }
            }

            _ => {}
        }
    }

    finalize(&mut draft, &mut entries, context);

    log::debug!(
        "extracted {} entries across {} categories",
        entries.len(),
        categories.len()
    );

    Catalog {
        categories,
        entries,
    }
}

/// Opens the category for a heading, reusing an already-seen slug so that
/// category slugs stay unique per document. Empty headings open nothing.
fn open_category(categories: &mut Vec<Category>, name: &str) -> Option<Category> {
    if name.is_empty() {
        return None;
    }
    let category_slug = slug(name);
    if let Some(existing) = categories.iter().find(|c| c.slug == category_slug) {
        return Some(existing.clone());
    }
    let category = Category {
        slug: category_slug,
        name: name.to_string(),
    };
    categories.push(category.clone());
    Some(category)
}

/// Builds a draft for a sub-heading entry marker.
///
/// The first link inside the heading is the primary (name = link text,
/// url = target); without one the heading's plain text is the name. Extra
/// links in the heading become related links.
fn heading_entry(
    category: Category,
    heading_text: &str,
    heading_links: &mut Vec<LinkDraft>,
) -> Option<Draft> {
    let mut links = std::mem::take(heading_links).into_iter();
    let (name, url) = match links.next() {
        Some(primary) if !primary.label.trim().is_empty() => {
            (primary.label.trim().to_string(), non_empty(primary.href))
        }
        _ => (heading_text.to_string(), None),
    };
    if name.is_empty() {
        return None;
    }
    let mut draft = Draft::heading(category, name, url);
    for link in links {
        draft.related_links.push(RelatedLink {
            label: link.label,
            href: link.href,
        });
    }
    Some(draft)
}

/// Routes a finished inline link into a draft: the leading link of a list
/// item becomes the primary, everything else is a related link.
fn attach_link(draft: &mut Draft, link: LinkDraft) {
    let leading = draft.marker == Marker::Item
        && !draft.has_primary
        && draft.name.trim().is_empty();
    if leading {
        draft.has_primary = true;
        draft.name = link.label.trim().to_string();
        draft.url = non_empty(link.href);
    } else {
        draft.related_links.push(RelatedLink {
            label: link.label,
            href: link.href,
        });
    }
}

/// The buffer plain text currently accumulates into: the name for an item
/// draft still waiting for its marker link, the status text otherwise.
fn active_text(draft: &mut Draft) -> &mut String {
    if draft.marker == Marker::Item && !draft.has_primary {
        &mut draft.name
    } else {
        &mut draft.text
    }
}

/// Pushes a single separating space, avoiding runs.
fn pad(buffer: &mut String) {
    if !buffer.is_empty() && !buffer.ends_with(' ') {
        buffer.push(' ');
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Converts the open draft into an entry, if it has a usable name.
///
/// Drafts with an empty name are dropped: malformed markers produce no
/// record. A missing primary URL is backfilled from a prior scan for the
/// same slug, when the context carries one.
fn finalize(draft: &mut Option<Draft>, entries: &mut Vec<AppEntry>, context: &ExtractContext) {
    let Some(d) = draft.take() else {
        return;
    };

    let name = d.name.trim().to_string();
    if name.is_empty() {
        return;
    }
    let entry_slug = slug(&name);

    let mut url = d.url;
    if url.is_none() {
        if let Some(record) = context.historical_scans.get(&entry_slug) {
            if record.url.is_some() {
                log::debug!("recovered url for stale entry {entry_slug} from prior scan");
                url = record.url.clone();
            }
        }
    }

    // Collapse break/paragraph padding, then drop the "- " style separator
    // that list markers leave in front of the status text.
    let text = d.text.split_whitespace().collect::<Vec<_>>().join(" ");
    let text = text
        .trim_start_matches(|c: char| matches!(c, '-' | '–' | '—' | ':' | ' '))
        .to_string();

    entries.push(AppEntry {
        name,
        slug: entry_slug,
        category: d.category,
        text,
        related_links: d.related_links,
        url,
    });
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::markdown::context::ScanRecord;

    fn extract_plain(markdown: &str) -> Catalog {
        extract(markdown, &ExtractContext::default())
    }

    // ------------------------------------------------------------------------
    // List-item entries
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_list_entries() {
        let readme = "\
# My Catalog

## Music

- [Ableton Live](https://www.ableton.com) - ✅ Native support
- [Audacity](https://www.audacityteam.org) - 🚫 Not yet

## Developer Tools

- [Zed](https://zed.dev) - ✅ Works
";
        let catalog = extract_plain(readme);

        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.categories[0].slug, "music");
        assert_eq!(catalog.categories[1].slug, "developer-tools");

        assert_eq!(catalog.entries.len(), 3);
        let first = &catalog.entries[0];
        assert_eq!(first.name, "Ableton Live");
        assert_eq!(first.slug, "ableton-live");
        assert_eq!(first.category.slug, "music");
        assert_eq!(first.url.as_deref(), Some("https://www.ableton.com"));
        assert_eq!(first.text, "✅ Native support");

        assert_eq!(catalog.entries[2].category.slug, "developer-tools");
    }

    #[test]
    fn test_entry_without_trailing_text_has_empty_text() {
        let readme = "## Music\n\n- [Ableton Live](https://www.ableton.com)\n";
        let catalog = extract_plain(readme);
        assert_eq!(catalog.entries.len(), 1);
        assert_eq!(catalog.entries[0].text, "");
    }

    #[test]
    fn test_plain_item_becomes_name_only() {
        let readme = "## Music\n\n- Ableton Live\n";
        let catalog = extract_plain(readme);
        assert_eq!(catalog.entries.len(), 1);
        assert_eq!(catalog.entries[0].name, "Ableton Live");
        assert_eq!(catalog.entries[0].url, None);
        assert_eq!(catalog.entries[0].text, "");
    }

    #[test]
    fn test_extra_links_in_item_are_related() {
        let readme = "\
## Music

- [Ableton Live](https://www.ableton.com) - ✅ See [App Store](https://apps.apple.com/ableton) and [Docs](https://help.ableton.com)
";
        let catalog = extract_plain(readme);
        let entry = &catalog.entries[0];
        assert_eq!(entry.url.as_deref(), Some("https://www.ableton.com"));
        assert_eq!(
            entry.related_links,
            vec![
                RelatedLink {
                    label: "App Store".to_string(),
                    href: "https://apps.apple.com/ableton".to_string(),
                },
                RelatedLink {
                    label: "Docs".to_string(),
                    href: "https://help.ableton.com".to_string(),
                },
            ]
        );
        // Related-link labels are anchor text, not status text.
        assert_eq!(entry.text, "✅ See and");
    }

    #[test]
    fn test_nested_items_feed_the_enclosing_entry() {
        let readme = "\
## Music

- [Ableton Live](https://www.ableton.com) - ✅ Works
  - [Forum thread](https://forum.ableton.com/t/1)
- [Audacity](https://www.audacityteam.org) - ✅ Works
";
        let catalog = extract_plain(readme);
        assert_eq!(catalog.entries.len(), 2);
        assert_eq!(catalog.entries[0].related_links.len(), 1);
        assert_eq!(
            catalog.entries[0].related_links[0].href,
            "https://forum.ableton.com/t/1"
        );
        assert!(catalog.entries[1].related_links.is_empty());
    }

    // ------------------------------------------------------------------------
    // Sub-heading entries
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_heading_entries() {
        let readme = "\
## Video

### [DaVinci Resolve](https://www.blackmagicdesign.com/products/davinciresolve)

✅ Yes, native as of v17.1

Related: [Release notes](https://www.blackmagicdesign.com/support)

### Final Cut Pro

✅ Yes, native
";
        let catalog = extract_plain(readme);
        assert_eq!(catalog.entries.len(), 2);

        let resolve = &catalog.entries[0];
        assert_eq!(resolve.name, "DaVinci Resolve");
        assert_eq!(
            resolve.url.as_deref(),
            Some("https://www.blackmagicdesign.com/products/davinciresolve")
        );
        assert_eq!(resolve.text, "✅ Yes, native as of v17.1 Related:");
        assert_eq!(resolve.related_links.len(), 1);
        assert_eq!(resolve.related_links[0].label, "Release notes");

        let fcp = &catalog.entries[1];
        assert_eq!(fcp.name, "Final Cut Pro");
        assert_eq!(fcp.url, None);
        assert_eq!(fcp.text, "✅ Yes, native");
    }

    #[test]
    fn test_list_under_heading_entry_does_not_split_it() {
        let readme = "\
## Video

### [DaVinci Resolve](https://example.com/resolve)

✅ Yes

- [Mirror](https://example.com/mirror)
- [Docs](https://example.com/docs)
";
        let catalog = extract_plain(readme);
        assert_eq!(catalog.entries.len(), 1);
        assert_eq!(catalog.entries[0].related_links.len(), 2);
    }

    // ------------------------------------------------------------------------
    // Category scoping
    // ------------------------------------------------------------------------

    #[test]
    fn test_content_before_first_category_is_skipped() {
        let readme = "\
# Does it work?

Intro paragraph with a [link](https://example.com).

- [Orphan App](https://example.com/orphan) - ✅ Works

## Music

- [Ableton Live](https://www.ableton.com) - ✅ Works
";
        let catalog = extract_plain(readme);
        assert_eq!(catalog.entries.len(), 1);
        assert_eq!(catalog.entries[0].name, "Ableton Live");
    }

    #[test]
    fn test_h1_closes_current_category() {
        let readme = "\
## Music

- [Ableton Live](https://www.ableton.com) - ✅ Works

# Appendix

- [Not An App](https://example.com) - note
";
        let catalog = extract_plain(readme);
        assert_eq!(catalog.entries.len(), 1);
    }

    #[test]
    fn test_duplicate_category_heading_reuses_slug() {
        let readme = "\
## Music

- [A](https://example.com/a) - ✅ ok

## Music

- [B](https://example.com/b) - ✅ ok
";
        let catalog = extract_plain(readme);
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.entries.len(), 2);
        assert_eq!(catalog.entries[1].category.slug, "music");
    }

    #[test]
    fn test_order_preservation() {
        let readme = "\
## B Category

- [Beta](https://example.com/b) - ✅ ok

## A Category

- [Alpha](https://example.com/a) - ✅ ok
- [Gamma](https://example.com/g) - ✅ ok
";
        let catalog = extract_plain(readme);
        let names: Vec<&str> = catalog.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Alpha", "Gamma"]);
        // Categories in order of first appearance
        assert_eq!(catalog.categories[0].slug, "b-category");
        assert_eq!(catalog.categories[1].slug, "a-category");
    }

    // ------------------------------------------------------------------------
    // Degraded parses
    // ------------------------------------------------------------------------

    #[test]
    fn test_malformed_link_degrades_to_plain_text() {
        // Unterminated link syntax: no link recorded, raw text kept.
        let readme = "## Music\n\n- [Broken App](https://example.com - ✅ ok\n";
        let catalog = extract_plain(readme);
        assert_eq!(catalog.entries.len(), 1);
        let entry = &catalog.entries[0];
        assert!(entry.url.is_none());
        assert!(entry.related_links.is_empty());
        assert!(entry.name.contains("Broken App"));
    }

    #[test]
    fn test_empty_link_label_yields_no_record() {
        let readme = "## Music\n\n- [](https://example.com)\n";
        let catalog = extract_plain(readme);
        assert!(catalog.entries.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let catalog = extract_plain("");
        assert!(catalog.categories.is_empty());
        assert!(catalog.entries.is_empty());
    }

    // ------------------------------------------------------------------------
    // Context heuristics
    // ------------------------------------------------------------------------

    #[test]
    fn test_missing_url_backfilled_from_prior_scan() {
        let readme = "## Music\n\n- Ableton Live\n";
        let context = ExtractContext::new().with_scan(ScanRecord::new(
            "ableton-live",
            Some("https://www.ableton.com".to_string()),
        ));
        let catalog = extract(readme, &context);
        assert_eq!(
            catalog.entries[0].url.as_deref(),
            Some("https://www.ableton.com")
        );
    }

    #[test]
    fn test_present_url_wins_over_prior_scan() {
        let readme = "## Music\n\n- [Ableton Live](https://www.ableton.com/live)\n";
        let context = ExtractContext::new().with_scan(ScanRecord::new(
            "ableton-live",
            Some("https://stale.example.com".to_string()),
        ));
        let catalog = extract(readme, &context);
        assert_eq!(
            catalog.entries[0].url.as_deref(),
            Some("https://www.ableton.com/live")
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let readme = "\
## Music

- [Ableton Live](https://www.ableton.com) - ✅ Works
- [Audacity](https://www.audacityteam.org) - 🚫 Nope

## Video

### [DaVinci Resolve](https://example.com/resolve)

✅ Yes
";
        let first = extract_plain(readme);
        let second = extract_plain(readme);
        assert_eq!(first, second);
    }
}
