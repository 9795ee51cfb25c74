//! Uniform random sampling of blocks and domains
//!
//! Both samplers draw a target size from an inclusive range, cap it at the
//! pool size, and take a uniform subset without replacement. Block weights
//! (see [`crate::domain::weight`]) deliberately do not bias the draw.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::BlockMap;
use crate::domain::error::DomainError;

/// Sampling profile: how many blocks one generation run selects.
///
/// `Compact` mirrors the 3-4 block variant, `Extended` the 5-7 block one.
/// Both draw 3-10 domains per selected block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Compact,
    Extended,
}

impl Profile {
    /// Inclusive range for the number of blocks to select.
    pub fn block_range(self) -> RangeInclusive<usize> {
        match self {
            Profile::Compact => 3..=4,
            Profile::Extended => 5..=7,
        }
    }

    /// Inclusive range for the number of domains per block.
    pub fn domain_range(self) -> RangeInclusive<usize> {
        3..=10
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Compact => write!(f, "compact"),
            Profile::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for Profile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Profile::Compact),
            "extended" => Ok(Profile::Extended),
            other => Err(DomainError::UnknownProfile(other.to_string())),
        }
    }
}

/// Select a uniform random subset of block labels.
///
/// The subset size is drawn from the profile's block range and capped at the
/// number of available blocks. No duplicates, no weighting.
pub fn choose_blocks<'a, R: Rng + ?Sized>(
    blocks: &'a BlockMap,
    profile: Profile,
    rng: &mut R,
) -> Vec<&'a str> {
    let labels: Vec<&str> = blocks.keys().map(String::as_str).collect();
    let want = rng.random_range(profile.block_range());
    let count = want.min(labels.len());
    debug!("choose_blocks: want={}, available={}", want, labels.len());
    labels.choose_multiple(rng, count).copied().collect()
}

/// Pick a uniform random subset of domains from one block's pool.
///
/// Picks `min(random_count, pool_len)` domains where `random_count` is drawn
/// from the profile's domain range. Never returns duplicates.
pub fn pick_domains<'a, R: Rng + ?Sized>(
    pool: &'a [String],
    profile: Profile,
    rng: &mut R,
) -> Vec<&'a str> {
    let want = rng.random_range(profile.domain_range());
    let count = want.min(pool.len());
    pool.choose_multiple(rng, count)
        .map(String::as_str)
        .collect()
}
