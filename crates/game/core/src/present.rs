//! Presentation helpers for rings: names, glint, tint and creative listing.
//!
//! All of these are pure functions the host's render and UI hooks call into.

use crate::env::{EffectOracle, WHITE};
use crate::state::{Accessory, RingVariant};

/// Registry path of the ring item.
pub const RING_ITEM: &str = "ring";

/// Translation key for a ring with raw metadata `meta`.
///
/// Unknown metadata falls back to the generic ring key.
pub fn translation_key(meta: u16) -> String {
    match RingVariant::from_meta(meta) {
        Some(variant) => format!("item.{variant}.name"),
        None => format!("item.{RING_ITEM}.name"),
    }
}

/// Untranslated display name: the ring key plus the effect name key used as
/// its format argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayName {
    pub key: String,
    pub effect_key: Option<String>,
}

pub fn display_name<O: EffectOracle + ?Sized>(ring: &Accessory, effects: &O) -> DisplayName {
    let effect_key = ring
        .effect()
        .and_then(|kind| effects.definition(&kind))
        .map(|definition| definition.name_key.clone());

    DisplayName {
        key: translation_key(ring.variant().meta()),
        effect_key,
    }
}

/// Rings with a known bound effect render with the enchantment glint.
pub fn has_glint<O: EffectOracle + ?Sized>(ring: &Accessory, effects: &O) -> bool {
    ring.effect().is_some_and(|kind| effects.is_known(&kind))
}

/// Tint for render layer `layer` of `ring`.
///
/// Layer 0 is the band and is never tinted; other layers take the bound
/// effect's liquid colour.
pub fn ring_color<O: EffectOracle + ?Sized>(ring: &Accessory, layer: u32, effects: &O) -> u32 {
    if layer == 0 {
        return WHITE;
    }
    ring.effect()
        .and_then(|kind| effects.definition(&kind))
        .map_or(WHITE, |definition| definition.liquid_color)
}

/// Rings shown in the creative inventory: the base ring, then one ring per
/// default effect.
pub fn creative_listing<O: EffectOracle + ?Sized>(effects: &O) -> Vec<Accessory> {
    std::iter::once(Accessory::base())
        .chain(
            effects
                .default_ring_effects()
                .into_iter()
                .map(|definition| Accessory::for_effect(&definition.kind)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EffectCatalog, EffectDefinition};
    use crate::state::EffectKind;

    fn catalog() -> EffectCatalog {
        [
            EffectDefinition::new("speed".into(), "effect.moveSpeed", 0x7CAFC6).with_default_ring(),
            EffectDefinition::new("luck".into(), "effect.luck", 0x339900),
            EffectDefinition::new("haste".into(), "effect.digSpeed", 0xD9C043).with_default_ring(),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn translation_keys_follow_variant() {
        assert_eq!(translation_key(0), "item.ring_disabled.name");
        assert_eq!(translation_key(1), "item.ring_enabled.name");
        assert_eq!(translation_key(9), "item.ring.name");
    }

    #[test]
    fn display_name_carries_effect_key() {
        let ring = Accessory::for_effect(&EffectKind::parse("speed"));
        let name = display_name(&ring, &catalog());
        assert_eq!(name.key, "item.ring_enabled.name");
        assert_eq!(name.effect_key.as_deref(), Some("effect.moveSpeed"));
        assert_eq!(display_name(&Accessory::base(), &catalog()).effect_key, None);
    }

    #[test]
    fn only_layer_one_is_tinted() {
        let ring = Accessory::for_effect(&EffectKind::parse("speed"));
        let catalog = catalog();
        assert_eq!(ring_color(&ring, 0, &catalog), WHITE);
        assert_eq!(ring_color(&ring, 1, &catalog), 0x7CAFC6);
        assert_eq!(ring_color(&Accessory::base(), 1, &catalog), WHITE);
    }

    #[test]
    fn glint_needs_known_effect() {
        let catalog = catalog();
        assert!(has_glint(&Accessory::for_effect(&"speed".into()), &catalog));
        assert!(!has_glint(&Accessory::for_effect(&"othermod:x".into()), &catalog));
        assert!(!has_glint(&Accessory::base(), &catalog));
    }

    #[test]
    fn creative_listing_starts_with_base_ring() {
        let listing = creative_listing(&catalog());
        let effects: Vec<_> = listing.iter().map(Accessory::effect).collect();
        assert_eq!(
            effects,
            [None, Some(EffectKind::parse("speed")), Some(EffectKind::parse("haste"))]
        );
    }
}
