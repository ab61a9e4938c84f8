//! Ring accessories and generic item stacks.
//!
//! An [`Accessory`] is a plain data record: a stack count, a display variant
//! and the item's tag storage. The bound effect and the optional durability
//! counter live in the tags so they survive the host's persistence untouched.

use super::common::{EffectKind, ResourceId};
use super::tags::ItemTags;

/// Tag key holding the bound effect identifier.
pub const TAG_EFFECT: &str = "effect";
/// Tag key holding the remaining durability.
pub const TAG_DURABILITY: &str = "durability";
/// Tag key holding the durability the ring was created with.
pub const TAG_MAX_DURABILITY: &str = "maxDurability";
/// Durability value meaning "this ring does not wear out".
pub const NO_DURABILITY: i32 = -1;

/// Display variant of a ring, stored by the host as item metadata.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RingVariant {
    /// Base ring, no effect bound.
    #[default]
    #[strum(serialize = "ring_disabled")]
    Disabled,

    /// Ring bound to an effect.
    #[strum(serialize = "ring_enabled")]
    Enabled,
}

impl RingVariant {
    /// Metadata value the host stores for this variant.
    pub const fn meta(self) -> u16 {
        match self {
            Self::Disabled => 0,
            Self::Enabled => 1,
        }
    }

    pub const fn from_meta(meta: u16) -> Option<Self> {
        match meta {
            0 => Some(Self::Disabled),
            1 => Some(Self::Enabled),
            _ => None,
        }
    }
}

/// One ring item instance occupying (or about to occupy) an equip slot.
///
/// The bound effect is written once by [`Accessory::for_effect`] and has no
/// setter afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accessory {
    count: u8,
    variant: RingVariant,
    tags: ItemTags,
}

impl Accessory {
    /// An empty slot.
    pub fn empty() -> Self {
        Self {
            count: 0,
            variant: RingVariant::Disabled,
            tags: ItemTags::new(),
        }
    }

    /// The unbound base ring.
    pub fn base() -> Self {
        Self {
            count: 1,
            ..Self::empty()
        }
    }

    /// A ring bound to `kind`.
    pub fn for_effect(kind: &EffectKind) -> Self {
        let mut tags = ItemTags::new();
        tags.set_str(TAG_EFFECT, kind.to_string());
        Self {
            count: 1,
            variant: RingVariant::Enabled,
            tags,
        }
    }

    /// Rebuilds an accessory from host-persisted parts.
    pub fn from_parts(count: u8, variant: RingVariant, tags: ItemTags) -> Self {
        Self {
            count,
            variant,
            tags,
        }
    }

    /// Attaches a durability counter (and its maximum) to this ring.
    #[must_use]
    pub fn with_durability(mut self, durability: u32) -> Self {
        let value = i32::try_from(durability).unwrap_or(i32::MAX);
        self.tags.set_int(TAG_DURABILITY, value);
        self.tags.set_int(TAG_MAX_DURABILITY, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn variant(&self) -> RingVariant {
        self.variant
    }

    pub fn tags(&self) -> &ItemTags {
        &self.tags
    }

    /// Effect identifier stored on this ring.
    ///
    /// Empty stacks and blank tags read as unbound. The identifier is not
    /// checked against any catalog here.
    pub fn effect(&self) -> Option<EffectKind> {
        if self.is_empty() {
            return None;
        }
        self.tags
            .get_str(TAG_EFFECT)
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(EffectKind::parse)
    }

    /// Remaining durability, if this ring wears out.
    pub fn durability(&self) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        self.tags
            .get_int(TAG_DURABILITY)
            .filter(|value| *value > NO_DURABILITY)
            .and_then(|value| u32::try_from(value).ok())
    }

    /// Durability the ring was created with.
    pub fn max_durability(&self) -> Option<u32> {
        self.tags
            .get_int(TAG_MAX_DURABILITY)
            .and_then(|value| u32::try_from(value).ok())
    }

    pub(crate) fn set_durability(&mut self, durability: u32) {
        let value = i32::try_from(durability).unwrap_or(i32::MAX);
        self.tags.set_int(TAG_DURABILITY, value);
    }

    /// Marks the stack as consumed; the host clears the slot.
    pub fn destroy(&mut self) {
        self.count = 0;
    }

    /// Converts this ring into a generic stack of `item`.
    pub fn to_stack(&self, item: ResourceId) -> ItemStack {
        ItemStack {
            item,
            count: self.count,
            meta: self.variant.meta(),
            tags: self.tags.clone(),
        }
    }
}

impl Default for Accessory {
    fn default() -> Self {
        Self::empty()
    }
}

/// Generic item stack used as recipe output and ingredient.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub item: ResourceId,
    #[cfg_attr(feature = "serde", serde(default = "default_count"))]
    pub count: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub meta: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: ItemTags,
}

#[cfg(feature = "serde")]
fn default_count() -> u8 {
    1
}

impl ItemStack {
    pub fn new(item: ResourceId, count: u8) -> Self {
        Self {
            item,
            count,
            meta: 0,
            tags: ItemTags::new(),
        }
    }

    pub fn of(item: &str) -> Self {
        Self::new(ResourceId::parse(item), 1)
    }

    #[must_use]
    pub fn with_meta(mut self, meta: u16) -> Self {
        self.meta = meta;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_ring_is_unbound() {
        let ring = Accessory::base();
        assert_eq!(ring.effect(), None);
        assert_eq!(ring.variant(), RingVariant::Disabled);
        assert_eq!(ring.durability(), None);
    }

    #[test]
    fn bound_ring_reports_its_effect() {
        let kind = EffectKind::parse("minecraft:speed");
        let ring = Accessory::for_effect(&kind);
        assert_eq!(ring.effect(), Some(kind));
        assert_eq!(ring.variant(), RingVariant::Enabled);
    }

    #[test]
    fn empty_stack_is_unbound_even_with_tags() {
        let mut ring = Accessory::for_effect(&EffectKind::parse("speed")).with_durability(3);
        ring.destroy();
        assert!(ring.is_empty());
        assert_eq!(ring.effect(), None);
        assert_eq!(ring.durability(), None);
    }

    #[test]
    fn sentinel_durability_reads_as_untracked() {
        let mut tags = ItemTags::new();
        tags.set_int(TAG_DURABILITY, NO_DURABILITY);
        let ring = Accessory::from_parts(1, RingVariant::Enabled, tags);
        assert_eq!(ring.durability(), None);
    }

    #[test]
    fn variant_names_and_meta() {
        assert_eq!(RingVariant::Disabled.as_ref(), "ring_disabled");
        assert_eq!(RingVariant::Enabled.to_string(), "ring_enabled");
        assert_eq!(RingVariant::from_meta(1), Some(RingVariant::Enabled));
        assert_eq!(RingVariant::from_meta(7), None);
    }
}
