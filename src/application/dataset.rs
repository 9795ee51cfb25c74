//! Dataset loading
//!
//! The dataset is the program's only input file; a missing or malformed file
//! is fatal at startup (there is nothing to sample from without it).

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::Dataset;

/// Load and parse the countries dataset from a JSON file.
pub fn load_dataset(path: &Path) -> ApplicationResult<Dataset> {
    debug!("load_dataset: path={}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ApplicationError::DatasetRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let dataset: Dataset =
        serde_json::from_str(&content).map_err(|e| ApplicationError::DatasetParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    if dataset.is_empty() {
        return Err(ApplicationError::DatasetEmpty(path.to_path_buf()));
    }

    info!(
        "loaded {} countries from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}
