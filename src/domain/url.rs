//! URL normalization for bare hostnames

use std::sync::LazyLock;

use regex::Regex;

// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ), then "://"
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").expect("hardcoded pattern compiles"));

/// Normalize a raw domain entry into a URL.
///
/// Trims surrounding whitespace; empty input stays empty; entries that
/// already carry a scheme are returned unchanged; bare hostnames get an
/// `https://` prefix.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if SCHEME_RE.is_match(trimmed) {
        return trimmed.to_string();
    }
    format!("https://{trimmed}")
}
