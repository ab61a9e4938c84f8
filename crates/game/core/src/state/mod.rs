//! Ring and wearer state representation.
//!
//! This module owns the plain data records the rules operate on: accessory
//! stacks with their tag storage, resource identifiers, and the wearer's
//! active-effect table. The host owns and serializes all of it; the rules only
//! read and write through these types.
pub mod types;

pub use types::{
    Accessory, ActiveEffects, AppliedEffect, EffectFlags, EffectKind, ItemStack, ItemTags,
    ResourceId, RingSlot, RingVariant, TagValue, Tick,
};
