//! Slug derivation utilities.
//!
//! Provides the normalization that turns human-readable names into stable,
//! URL-safe identifiers. Slugs are the identity used for ordering
//! comparisons, where raw names would produce false mismatches from case or
//! whitespace noise.

/// Derive a slug from a human-readable name.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Maps every non-alphanumeric character to a separator
/// 4. Collapses runs of separators into single hyphens
///
/// The result is deterministic and idempotent: `slug(slug(x)) == slug(x)`.
/// Non-ASCII letters (CJK and friends) are kept as-is.
///
/// # Examples
///
/// ```
/// use appdex_core::util::ids::slug;
///
/// assert_eq!(slug("Affinity Photo"), "affinity-photo");
/// assert_eq!(slug("  Mixed   Case  "), "mixed-case");
/// assert_eq!(slug("App (Beta)"), "app-beta");
/// assert_eq!(slug("QQ音乐"), "qq音乐");
/// ```
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            // Lowercasing can expand to multiple chars (e.g. 'İ' adds a
            // combining mark); keep only the alphanumeric ones so that
            // re-slugging the output is a no-op.
            for lower in c.to_lowercase().filter(|l| l.is_alphanumeric()) {
                out.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    out
}
