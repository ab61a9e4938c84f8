//! Traits describing read-only host data.
//!
//! Oracles expose the host's registries to the rules without coupling them to
//! a concrete engine. Only the effect registry is needed by ring logic.
mod effects;

pub use effects::{EffectCatalog, EffectDefinition, EffectOracle, WHITE};
