//! Weight extraction from block labels
//!
//! Labels can carry an integer weight in a parenthesized suffix, e.g.
//! `"Shops (5)"`. The weight is parsed and surfaced in listings, but
//! selection itself stays uniform: the source system computed these weights
//! without ever applying them, and that behavior is kept as-is.

use std::sync::LazyLock;

use regex::Regex;

/// Weight used when a label carries no (parseable) annotation.
pub const DEFAULT_WEIGHT: u32 = 1;

static WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)").expect("hardcoded pattern compiles"));

/// Extract the weight from a block label.
///
/// `"Shops (5)"` -> 5, `"Shops"` -> 1. The first parenthesized number wins.
/// Malformed or overflowing annotations fall back to [`DEFAULT_WEIGHT`].
pub fn extract_weight(label: &str) -> u32 {
    WEIGHT_RE
        .captures(label)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(DEFAULT_WEIGHT)
}

/// Weights for a list of block labels, in input order.
pub fn block_weights<S: AsRef<str>>(labels: &[S]) -> Vec<u32> {
    labels
        .iter()
        .map(|label| extract_weight(label.as_ref()))
        .collect()
}
