//! domgen: random themed domain sampler by country
//!
//! Loads a static JSON dataset mapping country -> block label -> domain pool,
//! then samples a random subset of blocks and a random subset of domains
//! within each block. Block labels may embed a weight annotation like
//! `"News (3)"`; weights are parsed and shown but never bias the draw.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, Generator};
pub use config::Settings;
pub use domain::{
    choose_blocks, extract_weight, normalize_url, pick_domains, BlockMap, BlockPick, Dataset,
    DomainError, Profile, Selection,
};
