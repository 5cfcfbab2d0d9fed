use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::raw_store::DEFAULT_RAW_OUTPUT;
use crate::seed_script::DEFAULT_SCRIPT_OUTPUT;

/// Paths for the two phases, overridable with `SEED_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// SEED_INPUT_DIR
    pub input_dir: PathBuf,
    /// SEED_RAW_OUTPUT
    pub raw_output: PathBuf,
    /// SEED_SCRIPT_OUTPUT
    pub script_output: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(Environment::with_prefix("SEED")))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .set_default("input_dir", ".")?
            .set_default("raw_output", DEFAULT_RAW_OUTPUT)?
            .set_default("script_output", DEFAULT_SCRIPT_OUTPUT)?
            .build()?
            .try_deserialize()
    }
}
