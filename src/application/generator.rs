//! Generation service
//!
//! One generation run: choose a random subset of blocks for the country,
//! then pick a random subset of domains within each chosen block.

use std::path::Path;

use rand::Rng;
use tracing::debug;

use crate::application::dataset::load_dataset;
use crate::application::error::ApplicationResult;
use crate::domain::{choose_blocks, pick_domains, BlockPick, Dataset, DomainError, Profile, Selection};

/// Service owning the immutable dataset.
pub struct Generator {
    dataset: Dataset,
}

impl Generator {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Load the dataset from disk and wrap it in a generator.
    pub fn from_path(path: &Path) -> ApplicationResult<Self> {
        Ok(Self::new(load_dataset(path)?))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Produce one selection for a country.
    ///
    /// Errors on unknown countries and on countries without blocks; a block
    /// with an empty pool simply yields an empty pick (source data is assumed
    /// to have non-empty pools).
    pub fn generate<R: Rng + ?Sized>(
        &self,
        country: &str,
        profile: Profile,
        rng: &mut R,
    ) -> ApplicationResult<Selection> {
        let blocks = self
            .dataset
            .blocks(country)
            .ok_or_else(|| DomainError::UnknownCountry(country.to_string()))?;
        if blocks.is_empty() {
            return Err(DomainError::EmptyCountry(country.to_string()).into());
        }

        let labels = choose_blocks(blocks, profile, rng);
        debug!("generate: country={}, blocks={}", country, labels.len());

        let picks = labels
            .into_iter()
            .map(|label| {
                let pool = &blocks[label];
                let domains = pick_domains(pool, profile, rng)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                BlockPick::new(label, domains)
            })
            .collect();

        Ok(Selection {
            country: country.to_string(),
            picks,
        })
    }
}
