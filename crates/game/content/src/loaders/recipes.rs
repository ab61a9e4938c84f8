//! Recipe book loader.
//!
//! Recipes are written in the typed form (pattern rows plus a symbol map)
//! and registered through [`ShapedRecipeBuilder`], so data files go through
//! the same validation as recipes built in code.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use fingers_core::{Ingredient, ItemStack, RecipeRegistry, ResourceId, ShapedRecipeBuilder};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One shaped recipe as written in a recipe book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSpec {
    pub output: ItemStack,
    pub pattern: Vec<String>,
    #[serde(default)]
    pub key: BTreeMap<char, Ingredient>,
}

impl RecipeSpec {
    fn into_builder(self) -> ShapedRecipeBuilder {
        let builder = self
            .pattern
            .iter()
            .fold(ShapedRecipeBuilder::new(self.output), |builder, row| {
                builder.row(row)
            });
        self.key
            .into_iter()
            .fold(builder, |builder, (symbol, ingredient)| {
                builder.key(symbol, ingredient)
            })
    }
}

/// Recipe book structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeBook {
    /// Namespace the recipe identifiers are allocated in.
    pub namespace: String,
    pub recipes: Vec<RecipeSpec>,
}

impl RecipeBook {
    /// Validates every recipe and adds it to `registry`.
    ///
    /// Stops at the first invalid recipe.
    pub fn register(self, registry: &mut RecipeRegistry) -> LoadResult<Vec<ResourceId>> {
        let namespace = self.namespace;
        self.recipes
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let output = spec.output.item.clone();
                spec.into_builder()
                    .register(registry, &namespace)
                    .with_context(|| format!("Invalid recipe #{index} for {output}"))
            })
            .collect()
    }
}

/// Loader for recipe books from RON files.
pub struct RecipeLoader;

impl RecipeLoader {
    /// Load a recipe book from a RON file.
    pub fn load(path: &Path) -> LoadResult<RecipeBook> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a recipe book from RON text.
    pub fn parse(content: &str) -> LoadResult<RecipeBook> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse recipe book RON: {}", e))
    }
}
