//! Check configuration.
//!
//! The title allow-list embeds a deployment-specific character set (ASCII
//! plus a handful of symbols and a small CJK subset used by catalog titles).
//! It is configuration, not a language assumption: swap the set with
//! [`TitleCharset::from_chars`] for a different deployment.

use std::collections::HashSet;

/// The default title allow-list: ASCII letters, digits, space, a small set
/// of punctuation, and the CJK characters appearing in catalog titles.
pub const DEFAULT_TITLE_CHARACTERS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890 -_.®/()音乐体验版";

/// The set of characters allowed in entry titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCharset(HashSet<char>);

impl TitleCharset {
    /// Builds an allow-list from the characters of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        TitleCharset(chars.chars().collect())
    }

    /// Returns true when `c` is allowed in a title.
    pub fn allows(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Returns true when the allow-list contains no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for TitleCharset {
    fn default() -> Self {
        Self::from_chars(DEFAULT_TITLE_CHARACTERS)
    }
}

/// Configuration for a check run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Allow-list applied by the title character-set rule.
    pub title_charset: TitleCharset,
}
