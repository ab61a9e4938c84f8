//! Effect catalog loader.

use std::path::Path;

use fingers_core::{EffectCatalog, EffectDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Effect catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectFile {
    pub effects: Vec<EffectDefinition>,
}

/// Loader for effect catalogs from RON files.
pub struct EffectLoader;

impl EffectLoader {
    /// Load an effect catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<EffectCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an effect catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<EffectCatalog> {
        let file: EffectFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse effect catalog RON: {}", e))?;

        Ok(file.effects.into_iter().collect())
    }
}
