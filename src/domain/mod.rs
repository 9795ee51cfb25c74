//! Domain layer: dataset model and sampling logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod sampler;
pub mod url;
pub mod weight;

pub use entities::{BlockMap, BlockPick, Dataset, Selection};
pub use error::DomainError;
pub use sampler::{choose_blocks, pick_domains, Profile};
pub use url::normalize_url;
pub use weight::{block_weights, extract_weight, DEFAULT_WEIGHT};
