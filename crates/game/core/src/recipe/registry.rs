//! Startup-time recipe collection.

use std::collections::{HashMap, HashSet};

use super::{Ingredient, MAX_GRID, RecipeArg, RecipeError, ShapedRecipe};
use crate::state::{ItemStack, ResourceId};

/// Destination for registered recipes, implemented by the host adapter.
pub trait RecipeSink {
    fn register(&mut self, recipe: ShapedRecipe);
}

impl RecipeSink for Vec<ShapedRecipe> {
    fn register(&mut self, recipe: ShapedRecipe) {
        self.push(recipe);
    }
}

/// Recipes collected during startup, in registration order.
#[derive(Clone, Debug, Default)]
pub struct RecipeRegistry {
    used_ids: HashSet<ResourceId>,
    recipes: Vec<ShapedRecipe>,
}

impl RecipeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a shaped recipe given as a flat argument list and stores it.
    ///
    /// Returns the identifier assigned to the recipe: `namespace:<output
    /// path>`, suffixed with `_1`, `_2`, ... when that is already taken.
    pub fn add_shaped<I>(
        &mut self,
        namespace: &str,
        output: ItemStack,
        args: I,
    ) -> Result<ResourceId, RecipeError>
    where
        I: IntoIterator<Item = RecipeArg>,
    {
        let (pattern, mut key) = parse_args(args)?;

        let Some(first) = pattern.first() else {
            return Err(RecipeError::EmptyPattern);
        };
        let width = first.chars().count();
        let height = pattern.len();

        key.insert(' ', Ingredient::Empty);
        let ingredients = prepare_materials(&pattern, &key, width, height)?;

        let recipe = ShapedRecipe {
            id: self.unused_id_for(namespace, &output),
            group: output.item.to_string(),
            width,
            height,
            ingredients,
            output,
        };
        self.add_recipe(recipe)
    }

    /// Stores an already-built recipe under its own identifier.
    pub fn add_recipe(&mut self, recipe: ShapedRecipe) -> Result<ResourceId, RecipeError> {
        if recipe.output.is_empty() {
            return Err(RecipeError::EmptyOutput);
        }

        let id = recipe.id.clone();
        self.used_ids.insert(id.clone());
        self.recipes.push(recipe);
        Ok(id)
    }

    /// Hands every collected recipe to the host registry.
    pub fn register_all<S: RecipeSink + ?Sized>(&self, sink: &mut S) {
        for recipe in &self.recipes {
            sink.register(recipe.clone());
        }
    }

    pub fn get(&self, id: &ResourceId) -> Option<&ShapedRecipe> {
        self.recipes.iter().find(|recipe| &recipe.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapedRecipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn unused_id_for(&self, namespace: &str, output: &ItemStack) -> ResourceId {
        let base = ResourceId::new(namespace, output.item.path());
        let mut id = base.clone();
        let mut index = 0;

        while self.used_ids.contains(&id) {
            index += 1;
            id = base.with_path(&format!("{}_{index}", base.path()));
        }

        id
    }
}

fn parse_args<I>(args: I) -> Result<(Vec<String>, HashMap<char, Ingredient>), RecipeError>
where
    I: IntoIterator<Item = RecipeArg>,
{
    let mut pattern = Vec::new();
    let mut key = HashMap::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg {
            RecipeArg::Row(row) => {
                let len = row.chars().count();
                if len > MAX_GRID {
                    return Err(RecipeError::RowTooLong { len });
                }
                if pattern.len() >= MAX_GRID {
                    return Err(RecipeError::TooManyRows);
                }
                pattern.push(row);
            }
            RecipeArg::Key(symbol) => {
                let ingredient = match args.next() {
                    Some(RecipeArg::Ingredient(ingredient)) => ingredient,
                    Some(RecipeArg::Row(tag)) => Ingredient::OreTag(tag),
                    Some(other) => {
                        return Err(RecipeError::UnexpectedArgument {
                            found: other.type_name(),
                        });
                    }
                    None => return Err(RecipeError::MissingIngredient { symbol }),
                };
                key.insert(symbol, ingredient);
            }
            other @ RecipeArg::Ingredient(_) => {
                return Err(RecipeError::UnexpectedArgument {
                    found: other.type_name(),
                });
            }
        }
    }

    Ok((pattern, key))
}

fn prepare_materials(
    pattern: &[String],
    key: &HashMap<char, Ingredient>,
    width: usize,
    height: usize,
) -> Result<Vec<Ingredient>, RecipeError> {
    let mut grid = vec![Ingredient::Empty; width * height];

    for (y, row) in pattern.iter().enumerate() {
        let found = row.chars().count();
        if found > width {
            return Err(RecipeError::RaggedRow {
                row: y,
                expected: width,
                found,
            });
        }
        for (x, symbol) in row.chars().enumerate() {
            let ingredient = key
                .get(&symbol)
                .ok_or(RecipeError::UnknownSymbol { symbol })?;
            grid[x + width * y] = ingredient.clone();
        }
    }

    Ok(grid)
}
