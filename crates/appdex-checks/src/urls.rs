//! Syntactic URL validity.
//!
//! The default predicate for the related-link rule. Validity here is purely
//! syntactic: no request is ever made.

use url::Url;

/// Returns true iff `candidate` parses as an absolute URL with an `http`
/// or `https` scheme.
///
/// # Examples
///
/// ```
/// use appdex_checks::urls::is_valid_http_url;
///
/// assert!(is_valid_http_url("https://example.com"));
/// assert!(is_valid_http_url("http://example.com/path?q=1"));
/// assert!(!is_valid_http_url("not a url"));
/// assert!(!is_valid_http_url("ftp://example.com"));
/// assert!(!is_valid_http_url("/relative/path"));
/// ```
pub fn is_valid_http_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
