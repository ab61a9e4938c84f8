//! Content embedded in the binary.

use fingers_core::{EffectCatalog, RecipeRegistry, RingConfig};

use crate::loaders::{ConfigLoader, EffectLoader, LoadResult, RecipeLoader};

const EFFECTS_RON: &str = include_str!("../data/effects.ron");
const RECIPES_RON: &str = include_str!("../data/recipes.ron");
const CONFIG_TOML: &str = include_str!("../data/config.toml");

/// Built-in ring configuration.
pub fn config() -> LoadResult<RingConfig> {
    ConfigLoader::parse(CONFIG_TOML)
}

/// Built-in effect catalog (vanilla effects).
pub fn effects() -> LoadResult<EffectCatalog> {
    EffectLoader::parse(EFFECTS_RON)
}

/// Built-in recipes, registered into a fresh registry.
pub fn recipes() -> LoadResult<RecipeRegistry> {
    let mut registry = RecipeRegistry::new();
    RecipeLoader::parse(RECIPES_RON)?.register(&mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingers_core::{EffectKind, EffectOracle, ring_item_id};

    #[test]
    fn builtin_config_matches_defaults() {
        assert_eq!(config().unwrap(), RingConfig::default());
    }

    #[test]
    fn builtin_effects_parse() {
        let catalog = effects().unwrap();
        assert!(catalog.is_known(&EffectKind::parse("speed")));
        assert!(catalog.is_known(&EffectKind::parse("minecraft:night_vision")));
        assert_eq!(catalog.default_ring_effects().len(), 6);
    }

    #[test]
    fn builtin_recipes_register_ring() {
        let registry = recipes().unwrap();
        let recipe = registry.get(&ring_item_id()).unwrap();
        assert_eq!((recipe.width, recipe.height), (3, 3));
    }
}
