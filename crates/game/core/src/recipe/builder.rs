use super::{Ingredient, RecipeArg, RecipeError, RecipeRegistry};
use crate::state::{ItemStack, ResourceId};

/// Typed front end for [`RecipeRegistry::add_shaped`].
///
/// ```
/// use fingers_core::recipe::{Ingredient, RecipeRegistry, ShapedRecipeBuilder};
/// use fingers_core::state::ItemStack;
///
/// let mut registry = RecipeRegistry::new();
/// let id = ShapedRecipeBuilder::new(ItemStack::of("potionfingers:ring"))
///     .row(" G ")
///     .row("G G")
///     .row(" G ")
///     .key('G', Ingredient::OreTag("ingotGold".into()))
///     .register(&mut registry, "potionfingers")
///     .unwrap();
/// assert_eq!(id.to_string(), "potionfingers:ring");
/// ```
#[derive(Clone, Debug)]
pub struct ShapedRecipeBuilder {
    output: ItemStack,
    rows: Vec<String>,
    keys: Vec<(char, Ingredient)>,
}

impl ShapedRecipeBuilder {
    pub fn new(output: ItemStack) -> Self {
        Self {
            output,
            rows: Vec::new(),
            keys: Vec::new(),
        }
    }

    pub fn row(mut self, row: &str) -> Self {
        self.rows.push(row.to_owned());
        self
    }

    pub fn key(mut self, symbol: char, ingredient: Ingredient) -> Self {
        self.keys.push((symbol, ingredient));
        self
    }

    /// Flattens the builder into the argument list form.
    pub fn into_args(self) -> (ItemStack, Vec<RecipeArg>) {
        let mut args: Vec<RecipeArg> = self.rows.into_iter().map(RecipeArg::Row).collect();
        for (symbol, ingredient) in self.keys {
            args.push(RecipeArg::Key(symbol));
            args.push(RecipeArg::Ingredient(ingredient));
        }
        (self.output, args)
    }

    pub fn register(
        self,
        registry: &mut RecipeRegistry,
        namespace: &str,
    ) -> Result<ResourceId, RecipeError> {
        let (output, args) = self.into_args();
        registry.add_shaped(namespace, output, args)
    }
}
