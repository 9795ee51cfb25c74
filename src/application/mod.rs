//! Application layer: dataset loading and generation service
//!
//! This layer orchestrates domain logic and owns the one-time dataset I/O.

pub mod dataset;
pub mod error;
pub mod generator;

pub use dataset::load_dataset;
pub use error::{ApplicationError, ApplicationResult};
pub use generator::Generator;
