//! Ring rules and data types shared by host adapters and content tools.
//!
//! `fingers-core` defines the canonical ring behaviour (effect stacking,
//! refresh cadence, durability) and the shaped-recipe registry as pure APIs.
//! The host engine owns the equipment inventory and the active-effect table;
//! adapters read from them, call into [`rules`], and execute the returned
//! instructions.
pub mod config;
pub mod env;
pub mod error;
pub mod present;
pub mod recipe;
pub mod rules;
pub mod state;

/// Namespace of everything this mod registers.
pub const MOD_ID: &str = "potionfingers";

pub use config::RingConfig;
pub use env::{EffectCatalog, EffectDefinition, EffectOracle};
pub use error::{ErrorSeverity, RingError};
pub use recipe::{
    Ingredient, RecipeArg, RecipeError, RecipeRegistry, RecipeSink, ShapedRecipe,
    ShapedRecipeBuilder,
};
pub use rules::{
    DurabilityBar, DurabilityOutcome, EffectLevelResolver, RefreshCadence, Resolution,
    ResolveQuery, consume_durability,
};
pub use state::{
    Accessory, ActiveEffects, AppliedEffect, EffectFlags, EffectKind, ItemStack, ItemTags,
    ResourceId, RingSlot, RingVariant, Tick,
};

/// Identifier of the ring item.
pub fn ring_item_id() -> ResourceId {
    ResourceId::new(MOD_ID, present::RING_ITEM)
}
