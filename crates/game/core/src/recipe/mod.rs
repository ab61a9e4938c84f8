//! Shaped crafting recipes.
//!
//! Recipes are collected into an explicit [`RecipeRegistry`] during startup
//! and handed to the host's registry in one pass through a [`RecipeSink`].
//! Patterns are validated up front; a malformed pattern is a configuration
//! error, never a runtime fault.

mod builder;
mod error;
mod registry;

pub use builder::ShapedRecipeBuilder;
pub use error::RecipeError;
pub use registry::{RecipeRegistry, RecipeSink};

use crate::state::{ItemStack, ResourceId};

/// Maximum pattern width and height.
pub const MAX_GRID: usize = 3;

/// One cell requirement of a recipe grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ingredient {
    /// Nothing; the cell must stay empty.
    #[default]
    Empty,
    /// Any stack of an item.
    Item(ResourceId),
    /// A stack matching item, metadata and tags.
    Stack(ItemStack),
    /// Any item registered under an ore-dictionary name.
    OreTag(String),
}

/// One element of the flat argument list accepted by
/// [`RecipeRegistry::add_shaped`].
///
/// Rows come first, then alternating `Key` / ingredient pairs. A `Row`
/// directly after a `Key` names an ore tag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecipeArg {
    Row(String),
    Key(char),
    Ingredient(Ingredient),
}

impl RecipeArg {
    pub fn row(row: &str) -> Self {
        Self::Row(row.to_owned())
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Self::Row(_) => "row",
            Self::Key(_) => "symbol",
            Self::Ingredient(_) => "ingredient",
        }
    }
}

impl From<Ingredient> for RecipeArg {
    fn from(ingredient: Ingredient) -> Self {
        Self::Ingredient(ingredient)
    }
}

impl From<char> for RecipeArg {
    fn from(symbol: char) -> Self {
        Self::Key(symbol)
    }
}

/// A validated shaped recipe ready for the host registry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapedRecipe {
    pub id: ResourceId,
    /// Recipe-book group: the output item's full identifier.
    pub group: String,
    pub width: usize,
    pub height: usize,
    /// Row-major grid of `width * height` cells.
    pub ingredients: Vec<Ingredient>,
    pub output: ItemStack,
}

impl ShapedRecipe {
    /// Ingredient at column `x`, row `y`.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Ingredient> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.ingredients.get(x + self.width * y)
    }
}
