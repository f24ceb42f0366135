//! Arena configuration loader.

use std::path::Path;

use anyhow::Context;
use arena_core::ArenaConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for arena configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<ArenaConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        tracing::debug!("Loaded arena config from {}", path.display());
        Ok(config)
    }

    pub fn parse(source: &str) -> LoadResult<ArenaConfig> {
        let config: ArenaConfig = toml::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.rounds == 0 {
            anyhow::bail!("rounds must be at least 1");
        }

        Ok(config)
    }
}
