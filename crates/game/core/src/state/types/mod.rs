pub mod accessory;
pub mod common;
pub mod status;
pub mod tags;

// Re-export accessory types
pub use accessory::{Accessory, ItemStack, RingVariant};

// Re-export common types
pub use common::{EffectKind, ResourceId, RingSlot, Tick};

// Re-export status effects
pub use status::{ActiveEffects, AppliedEffect, EffectFlags};

// Re-export tag storage
pub use tags::{ItemTags, TagValue};
