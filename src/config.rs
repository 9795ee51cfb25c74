//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/domgen/domgen.toml`
//! 3. Environment variables: `DOMGEN_*` prefix
//! 4. CLI flags (applied by the caller)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Profile;

/// Effective settings after merging all config layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Path to the countries dataset (JSON)
    pub dataset: PathBuf,
    /// Default sampling profile
    pub profile: Profile,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("countries.json"),
            profile: Profile::default(),
        }
    }
}

impl Settings {
    /// Load settings: defaults, then the global config file, then env vars.
    pub fn load() -> ApplicationResult<Self> {
        Self::load_from(Self::global_config_path().as_deref())
    }

    /// Load settings with an explicit config file (used by tests).
    pub fn load_from(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("DOMGEN"));

        let merged = builder.build().map_err(config_error)?;

        // serde(default) fills anything the layers left unspecified
        merged.try_deserialize().map_err(config_error)
    }

    /// Path of the global config file, if a home directory can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "domgen").map(|dirs| dirs.config_dir().join("domgen.toml"))
    }

    /// Render the effective settings as TOML (for `config show`).
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("cannot render settings: {e}"),
        })
    }
}

fn config_error(e: config::ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
