//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::Profile;

/// Random themed domain sampler: pick a country, get random domain sets per topic block
#[derive(Parser, Debug)]
#[command(name = "domgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Dataset file (overrides config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub dataset: Option<PathBuf>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random domain selection for a country
    Generate {
        /// Country to sample from
        country: String,

        /// Sampling profile: compact (3-4 blocks) or extended (5-7 blocks)
        #[arg(short, long)]
        profile: Option<Profile>,

        /// Flatten output: one normalized URL per line, no block grouping
        #[arg(long)]
        flat: bool,

        /// Emit the selection as JSON
        #[arg(long, conflicts_with = "flat")]
        json: bool,

        /// Seed the RNG for reproducible selections
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List available countries
    Countries,

    /// List a country's blocks with weight and pool size
    Blocks {
        /// Country to inspect
        country: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,
}
