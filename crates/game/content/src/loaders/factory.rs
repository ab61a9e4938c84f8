//! Content factory for loading ring content from a data directory.

use std::path::{Path, PathBuf};

use fingers_core::{EffectCatalog, RecipeRegistry, RingConfig};

use crate::loaders::{ConfigLoader, EffectLoader, LoadResult, RecipeLoader};

/// Content factory that loads all ring content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── effects.ron
/// └── recipes.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load ring configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<RingConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the effect catalog from `effects.ron`.
    pub fn load_effects(&self) -> LoadResult<EffectCatalog> {
        EffectLoader::load(&self.data_dir.join("effects.ron"))
    }

    /// Load `recipes.ron` and register every recipe into a fresh registry.
    pub fn load_recipes(&self) -> LoadResult<RecipeRegistry> {
        let book = RecipeLoader::load(&self.data_dir.join("recipes.ron"))?;
        let mut registry = RecipeRegistry::new();
        book.register(&mut registry)?;
        Ok(registry)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_directory_content() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "effect_duration = 99").unwrap();
        std::fs::write(
            dir.path().join("effects.ron"),
            r#"(effects: [(kind: "speed", name_key: "effect.moveSpeed", liquid_color: 0x7CAFC6)])"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("recipes.ron"),
            r#"(namespace: "potionfingers", recipes: [])"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().refresh_rate(), 49);
        assert_eq!(factory.load_effects().unwrap().len(), 1);
        assert!(factory.load_recipes().unwrap().is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let factory = ContentFactory::new("/nonexistent/ring-data");
        let error = factory.load_effects().unwrap_err();
        assert!(error.to_string().contains("effects.ron"));
    }
}
