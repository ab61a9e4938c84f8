//! Effect-level resolution for stacked rings.
//!
//! Given every ring a wearer has equipped and the ring that triggered the
//! evaluation, decides which effect the ring grants, at which amplifier, and
//! whether a stale stronger effect has to be removed first.
//!
//! # Stacking
//!
//! One matching ring yields amplifier 0, two yield amplifier 1. The level is
//! capped at [`RingConfig::MAX_AMPLIFIER`], so further rings change nothing.
//!
//! # Removal
//!
//! Active effects never downgrade on their own, so when a ring is taken off
//! and the wearer's effect is stronger than what the remaining rings grant,
//! the effect is removed before reapplying. Effects whose remaining duration
//! exceeds the ring duration came from some other source and are left alone.

use crate::config::RingConfig;
use crate::env::EffectOracle;
use crate::state::{Accessory, AppliedEffect, EffectFlags, EffectKind, RingSlot};

/// Inputs for one resolution.
#[derive(Clone, Copy, Debug)]
pub struct ResolveQuery<'a> {
    /// Every ring-category slot of the wearer, in order. May contain empties.
    pub slots: &'a [Accessory],
    /// The ring that triggered the evaluation.
    pub subject: &'a Accessory,
    /// Slot the subject occupies, if it is still in `slots`.
    pub subject_slot: Option<RingSlot>,
    /// True when the subject is being removed from its slot.
    pub unequipping: bool,
}

impl<'a> ResolveQuery<'a> {
    /// Query for a ring sitting in `slot` (equip or periodic refresh).
    pub fn worn(slots: &'a [Accessory], slot: RingSlot) -> Option<Self> {
        let subject = slots.get(slot.0)?;
        Some(Self {
            slots,
            subject,
            subject_slot: Some(slot),
            unequipping: false,
        })
    }

    /// Query for a ring leaving `slot`.
    ///
    /// `subject_slot` excludes that slot from the count even if the host has
    /// not cleared it yet. A different ring already swapped into the slot
    /// still counts.
    pub fn unequip(slots: &'a [Accessory], subject: &'a Accessory, slot: Option<RingSlot>) -> Self {
        Self {
            slots,
            subject,
            subject_slot: slot,
            unequipping: true,
        }
    }

    /// True when `ring` in `slot` is the subject on its way out.
    fn is_leaving(&self, slot: RingSlot, ring: &Accessory) -> bool {
        self.unequipping && self.subject_slot == Some(slot) && ring == self.subject
    }
}

/// Instructions produced by one resolution.
///
/// The host executes `remove` before `apply`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Effect bound to the subject, if known to the host.
    pub kind: Option<EffectKind>,
    /// Rings (excluding a leaving subject) bound to `kind`.
    pub match_count: usize,
    /// Amplifier the remaining rings grant. `None` means nothing to grant.
    pub level: Option<u8>,
    /// Stale effect to remove.
    pub remove: Option<EffectKind>,
    /// Effect to (re)apply.
    pub apply: Option<AppliedEffect>,
}

impl Resolution {
    pub fn noop() -> Self {
        Self::default()
    }

    pub fn is_noop(&self) -> bool {
        self.remove.is_none() && self.apply.is_none()
    }

    /// Level in the host's signed convention, where -1 means "do not apply".
    pub fn signed_level(&self) -> i32 {
        self.level.map_or(-1, i32::from)
    }
}

/// Computes stacking levels against an effect registry.
#[derive(Clone, Copy)]
pub struct EffectLevelResolver<'a, O: EffectOracle + ?Sized> {
    effects: &'a O,
    config: &'a RingConfig,
}

impl<'a, O: EffectOracle + ?Sized> EffectLevelResolver<'a, O> {
    pub fn new(effects: &'a O, config: &'a RingConfig) -> Self {
        Self { effects, config }
    }

    /// Effect `ring` grants, or `None` for empty, unbound or unknown rings.
    pub fn bound_kind(&self, ring: &Accessory) -> Option<EffectKind> {
        ring.effect().filter(|kind| self.effects.is_known(kind))
    }

    /// Resolves `query`.
    ///
    /// `active` looks up the wearer's current effect of a kind; it is only
    /// called for the subject's own kind.
    pub fn resolve<F>(&self, query: ResolveQuery<'_>, active: F) -> Resolution
    where
        F: FnOnce(&EffectKind) -> Option<AppliedEffect>,
    {
        let Some(target) = self.bound_kind(query.subject) else {
            return Resolution::noop();
        };

        let match_count = self.count_matches(&query, &target);
        let level = match_count
            .checked_sub(1)
            .map(|level| level.min(usize::from(RingConfig::MAX_AMPLIFIER)) as u8);
        let signed_level = level.map_or(-1, i32::from);

        let current = active(&target);
        let current_amplifier = current.as_ref().map_or(-1, |e| i32::from(e.amplifier));

        let remove = match &current {
            Some(effect)
                if query.unequipping
                    && current_amplifier > signed_level
                    && effect.duration <= self.config.effect_duration =>
            {
                Some(target.clone())
            }
            _ => None,
        };

        let apply = level.map(|amplifier| {
            AppliedEffect::new(
                target.clone(),
                amplifier,
                self.config.effect_duration,
                EffectFlags::SILENT_AMBIENT,
            )
        });

        Resolution {
            kind: Some(target),
            match_count,
            level,
            remove,
            apply,
        }
    }

    fn count_matches(&self, query: &ResolveQuery<'_>, target: &EffectKind) -> usize {
        query
            .slots
            .iter()
            .enumerate()
            .filter(|(index, ring)| !query.is_leaving(RingSlot(*index), ring))
            .filter(|(_, ring)| self.bound_kind(ring).as_ref() == Some(target))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EffectCatalog, EffectDefinition};

    fn catalog() -> EffectCatalog {
        [
            EffectDefinition::new("speed".into(), "effect.moveSpeed", 0x7CAFC6),
            EffectDefinition::new("regeneration".into(), "effect.regeneration", 0xCD5CAB),
        ]
        .into_iter()
        .collect()
    }

    fn ring(kind: &str) -> Accessory {
        Accessory::for_effect(&EffectKind::parse(kind))
    }

    fn speed() -> EffectKind {
        EffectKind::parse("speed")
    }

    fn active(amplifier: u8, duration: u32) -> AppliedEffect {
        AppliedEffect::new(speed(), amplifier, duration, EffectFlags::SILENT_AMBIENT)
    }

    #[test]
    fn unbound_subject_is_noop() {
        let catalog = catalog();
        let config = RingConfig::default();
        let resolver = EffectLevelResolver::new(&catalog, &config);
        let slots = [Accessory::base(), ring("speed")];

        let resolution = resolver.resolve(ResolveQuery::worn(&slots, RingSlot(0)).unwrap(), |_| {
            panic!("no lookup for unbound rings")
        });
        assert_eq!(resolution, Resolution::noop());
    }

    #[test]
    fn unknown_effect_is_noop() {
        let catalog = catalog();
        let config = RingConfig::default();
        let resolver = EffectLevelResolver::new(&catalog, &config);
        let slots = [ring("othermod:flight"), ring("othermod:flight")];

        let resolution =
            resolver.resolve(ResolveQuery::worn(&slots, RingSlot(0)).unwrap(), |_| None);
        assert!(resolution.is_noop());
        assert_eq!(resolution.signed_level(), -1);
    }

    #[test]
    fn single_ring_applies_base_level() {
        let catalog = catalog();
        let config = RingConfig::default();
        let resolver = EffectLevelResolver::new(&catalog, &config);
        let slots = [ring("speed"), Accessory::empty()];

        let resolution =
            resolver.resolve(ResolveQuery::worn(&slots, RingSlot(0)).unwrap(), |_| None);

        assert_eq!(resolution.match_count, 1);
        assert_eq!(resolution.level, Some(0));
        assert_eq!(resolution.remove, None);
        let apply = resolution.apply.unwrap();
        assert_eq!(apply.kind, speed());
        assert_eq!(apply.amplifier, 0);
        assert_eq!(apply.duration, 199);
        assert!(apply.is_ambient());
        assert!(!apply.shows_particles());
    }

    #[test]
    fn two_rings_stack_regardless_of_order() {
        let catalog = catalog();
        let config = RingConfig::default();
        let resolver = EffectLevelResolver::new(&catalog, &config);

        let layouts = [
            [ring("speed"), ring("speed"), ring("regeneration")],
            [ring("regeneration"), ring("speed"), ring("speed")],
            [ring("speed"), ring("regeneration"), ring("speed")],
        ];
        for slots in &layouts {
            let slot = slots.iter().position(|r| r.effect() == Some(speed())).unwrap();
            let resolution = resolver.resolve(
                ResolveQuery::worn(slots, RingSlot(slot)).unwrap(),
                |_| None,
            );
            assert_eq!(resolution.level, Some(1));
        }
    }

    #[test]
    fn stacking_is_capped() {
        let catalog = catalog();
        let config = RingConfig::default();
        let resolver = EffectLevelResolver::new(&catalog, &config);
        let slots = [ring("speed"), ring("speed"), ring("speed"), ring("speed")];

        let resolution =
            resolver.resolve(ResolveQuery::worn(&slots, RingSlot(2)).unwrap(), |_| None);
        assert_eq!(resolution.match_count, 4);
        assert_eq!(resolution.level, Some(1));
    }

    #[test]
    fn other_effects_do_not_count() {
        let catalog = catalog();
        let config = RingConfig::default();
        let resolver = EffectLevelResolver::new(&catalog, &config);
        let slots = [ring("speed"), ring("regeneration")];

        let resolution =
            resolver.resolve(ResolveQuery::worn(&slots, RingSlot(0)).unwrap(), |_| None);
        assert_eq!(resolution.level, Some(0));
    }

    #[test]
    fn unequipping_last_ring_grants_nothing() {
        let catalog = catalog();
        let config = RingConfig::default();
        let resolver = EffectLevelResolver::new(&catalog, &config);
        let slots = [ring("speed"), Accessory::empty()];

        let resolution = resolver.resolve(
            ResolveQuery::unequip(&slots, &slots[0], Some(RingSlot(0))),
            |_| Some(active(0, 150)),
        );

        assert_eq!(resolution.match_count, 0);
        assert_eq!(resolution.level, None);
        assert_eq!(resolution.remove, Some(speed()));
        assert_eq!(resolution.apply, None);
    }

    #[test]
    fn unequipping_one_of_two_removes_stale_amplifier() {
        let catalog = catalog();
        let config = RingConfig::default();
        let resolver = EffectLevelResolver::new(&catalog, &config);
        let slots = [ring("speed"), ring("speed")];

        let resolution = resolver.resolve(
            ResolveQuery::unequip(&slots, &slots[1], Some(RingSlot(1))),
            |_| Some(active(1, 199)),
        );

        assert_eq!(resolution.level, Some(0));
        assert_eq!(resolution.remove, Some(speed()));
        assert_eq!(resolution.apply.map(|e| e.amplifier), Some(0));
    }

    #[test]
    fn unequip_with_slot_already_cleared() {
        let catalog = catalog();
        let config = RingConfig::default();
        let resolver = EffectLevelResolver::new(&catalog, &config);
        let leaving = ring("speed");
        let slots = [ring("speed"), Accessory::empty()];

        let resolution = resolver.resolve(ResolveQuery::unequip(&slots, &leaving, None), |_| {
            Some(active(1, 120))
        });

        assert_eq!(resolution.match_count, 1);
        assert_eq!(resolution.remove, Some(speed()));
    }

    #[test]
    fn long_effect_from_another_source_is_kept() {
        let catalog = catalog();
        let config = RingConfig::default();
        let resolver = EffectLevelResolver::new(&catalog, &config);
        let slots = [ring("speed"), ring("speed")];

        let resolution = resolver.resolve(
            ResolveQuery::unequip(&slots, &slots[0], Some(RingSlot(0))),
            |_| Some(active(1, 3600)),
        );

        assert_eq!(resolution.remove, None);
        assert_eq!(resolution.apply.map(|e| e.amplifier), Some(0));
    }

    #[test]
    fn refresh_never_removes() {
        let catalog = catalog();
        let config = RingConfig::default();
        let resolver = EffectLevelResolver::new(&catalog, &config);
        let slots = [ring("speed"), Accessory::base()];

        let resolution =
            resolver.resolve(ResolveQuery::worn(&slots, RingSlot(0)).unwrap(), |_| {
                Some(active(1, 10))
            });
        assert_eq!(resolution.remove, None);
        assert!(resolution.apply.is_some());
    }

    #[test]
    fn ring_swapped_into_leaving_slot_still_counts() {
        let catalog = catalog();
        let config = RingConfig::default();
        let resolver = EffectLevelResolver::new(&catalog, &config);
        let leaving = ring("speed").with_durability(4);
        let slots = [ring("speed"), ring("speed")];

        let resolution = resolver.resolve(
            ResolveQuery::unequip(&slots, &leaving, Some(RingSlot(1))),
            |_| Some(active(1, 150)),
        );

        assert_eq!(resolution.match_count, 2);
        assert_eq!(resolution.level, Some(1));
        assert_eq!(resolution.remove, None);
    }

    #[test]
    fn worn_query_rejects_missing_slot() {
        let slots = [ring("speed")];
        assert!(ResolveQuery::worn(&slots, RingSlot(3)).is_none());
    }
}
