//! Domain entities: core data structures

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::url::normalize_url;
use crate::domain::weight::extract_weight;

/// Mapping from block label to its domain pool.
///
/// Labels may carry a weight annotation in a parenthesized suffix,
/// e.g. `"News (3)"`. The domain pool is assumed non-empty in source data.
pub type BlockMap = BTreeMap<String, Vec<String>>;

/// Static dataset: country name -> block label -> domain pool.
///
/// Loaded once at startup and immutable afterwards. `BTreeMap` gives
/// deterministic (sorted) iteration order for listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    countries: BTreeMap<String, BlockMap>,
}

impl Dataset {
    /// Build a dataset from an already-parsed country map.
    pub fn new(countries: BTreeMap<String, BlockMap>) -> Self {
        Self { countries }
    }

    /// Country names in sorted order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Block map for a country, if the country exists.
    pub fn blocks(&self, country: &str) -> Option<&BlockMap> {
        self.countries.get(country)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// One sampled block: its label, the weight parsed from the label, and the
/// picked domains.
///
/// The weight is informational only; selection is uniform (see sampler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockPick {
    pub label: String,
    pub weight: u32,
    pub domains: Vec<String>,
}

impl BlockPick {
    /// Assemble a pick from a label and its sampled domains.
    pub fn new(label: &str, domains: Vec<String>) -> Self {
        Self {
            label: label.to_string(),
            weight: extract_weight(label),
            domains,
        }
    }
}

/// Result of one generation run. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub country: String,
    pub picks: Vec<BlockPick>,
}

impl Selection {
    /// Flattened view: all picked domains in block order, normalized to URLs.
    pub fn flatten(&self) -> Vec<String> {
        self.picks
            .iter()
            .flat_map(|pick| pick.domains.iter())
            .map(|domain| normalize_url(domain))
            .collect()
    }

    /// Total number of picked domains across all blocks.
    pub fn domain_count(&self) -> usize {
        self.picks.iter().map(|pick| pick.domains.len()).sum()
    }
}
