//! Ring configuration loader.

use std::path::Path;

use fingers_core::RingConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for ring configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<RingConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<RingConfig> {
        let config: RingConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.effect_duration == 0 {
            anyhow::bail!("effect_duration must be at least one tick");
        }

        Ok(config)
    }
}
