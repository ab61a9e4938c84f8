//! Ring callbacks invoked by the host's equipment subsystem.
//!
//! The host calls [`RingBehavior`] once on equip, once on unequip and on
//! every tick a ring is worn. Each callback resolves the ring's effect level
//! through [`EffectLevelResolver`] and executes the resulting remove/apply
//! instructions against the [`Wearer`].
//!
//! # Authority
//!
//! Only player-like wearers in the authoritative simulation are mutated.
//! Remote (client-side) callbacks and other entities are skipped.

mod outcome;

pub use outcome::{RingOutcome, SkipReason};

use fingers_core::{
    Accessory, DurabilityOutcome, EffectCatalog, EffectLevelResolver, EffectOracle,
    RefreshCadence, Resolution, ResolveQuery, RingConfig, RingSlot, consume_durability,
};
use tracing::{debug, info, warn};

use crate::api::{Result, RuntimeError, Wearer};

/// Ring behaviour bound to a tuning config and an effect registry.
pub struct RingBehavior<O: EffectOracle = EffectCatalog> {
    config: RingConfig,
    effects: O,
    cadence: RefreshCadence,
}

impl RingBehavior<EffectCatalog> {
    /// Behaviour using the built-in config and vanilla effect catalog.
    pub fn builtin() -> Result<Self> {
        let config =
            fingers_content::builtin::config().map_err(|e| RuntimeError::Content(e.into()))?;
        let effects =
            fingers_content::builtin::effects().map_err(|e| RuntimeError::Content(e.into()))?;
        Ok(Self::new(config, effects))
    }
}

impl<O: EffectOracle> RingBehavior<O> {
    pub fn new(config: RingConfig, effects: O) -> Self {
        let cadence = RefreshCadence::new(&config);
        Self {
            config,
            effects,
            cadence,
        }
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    pub fn effects(&self) -> &O {
        &self.effects
    }

    pub fn cadence(&self) -> RefreshCadence {
        self.cadence
    }

    fn resolver(&self) -> EffectLevelResolver<'_, O> {
        EffectLevelResolver::new(&self.effects, &self.config)
    }

    /// Called after a ring was placed into `slot`.
    pub fn on_equipped<W: Wearer + ?Sized>(
        &self,
        wearer: &mut W,
        slot: RingSlot,
    ) -> Result<RingOutcome> {
        let ring = checked_slot(&*wearer, slot)?;
        if let Some(kind) = ring.effect().filter(|kind| !self.effects.is_known(kind)) {
            warn!(%slot, %kind, "equipped ring is bound to an unknown effect");
        }
        if let Some(reason) = authority_skip(&*wearer) {
            return Ok(RingOutcome::Skipped(reason));
        }

        let resolution = self.resolve_worn(&*wearer, slot)?;
        Ok(self.finish(wearer, Some(slot), resolution))
    }

    /// Called when `ring` leaves `slot`.
    ///
    /// `slot` may be `None` if the host already cleared it; a slot that still
    /// holds the ring is excluded from the stacking count.
    pub fn on_unequipped<W: Wearer + ?Sized>(
        &self,
        wearer: &mut W,
        slot: Option<RingSlot>,
        ring: &Accessory,
    ) -> Result<RingOutcome> {
        if let Some(slot) = slot {
            checked_slot(&*wearer, slot)?;
        }
        if let Some(reason) = authority_skip(&*wearer) {
            return Ok(RingOutcome::Skipped(reason));
        }

        let resolution = {
            let query = ResolveQuery::unequip(wearer.ring_slots(), ring, slot);
            self.resolver()
                .resolve(query, |kind| wearer.active_effect(kind))
        };
        Ok(self.finish(wearer, slot, resolution))
    }

    /// Called on every tick the ring in `slot` is worn.
    ///
    /// Re-resolves on scheduled refresh ticks or when the ring's effect has
    /// lapsed, then spends one durability point if an effect was applied.
    pub fn on_worn_tick<W: Wearer + ?Sized>(
        &self,
        wearer: &mut W,
        slot: RingSlot,
    ) -> Result<RingOutcome> {
        let ring = checked_slot(&*wearer, slot)?;
        let Some(kind) = self.resolver().bound_kind(ring) else {
            return Ok(RingOutcome::Skipped(SkipReason::Unbound));
        };

        let active = wearer.active_effect(&kind).is_some();
        if !self.cadence.should_refresh(wearer.ticks_existed(), active) {
            return Ok(RingOutcome::Skipped(SkipReason::NotScheduled));
        }
        if let Some(reason) = authority_skip(&*wearer) {
            return Ok(RingOutcome::Skipped(reason));
        }

        let resolution = self.resolve_worn(&*wearer, slot)?;
        let mut outcome = self.finish(wearer, Some(slot), resolution);

        if let RingOutcome::Resolved {
            resolution,
            durability,
        } = &mut outcome
        {
            if resolution.apply.is_some() {
                *durability = self.wear_down(wearer, slot);
            }
        }

        Ok(outcome)
    }

    /// Runs the worn-tick callback for every occupied slot.
    pub fn tick_all<W: Wearer + ?Sized>(&self, wearer: &mut W) -> Result<Vec<RingOutcome>> {
        let occupied: Vec<RingSlot> = wearer
            .ring_slots()
            .iter()
            .enumerate()
            .filter(|(_, ring)| !ring.is_empty())
            .map(|(index, _)| RingSlot(index))
            .collect();

        occupied
            .into_iter()
            .map(|slot| self.on_worn_tick(wearer, slot))
            .collect()
    }

    fn resolve_worn<W: Wearer + ?Sized>(&self, wearer: &W, slot: RingSlot) -> Result<Resolution> {
        let slots = wearer.ring_slots();
        let query = ResolveQuery::worn(slots, slot).ok_or(RuntimeError::SlotOutOfRange {
            slot,
            slots: slots.len(),
        })?;
        Ok(self
            .resolver()
            .resolve(query, |kind| wearer.active_effect(kind)))
    }

    fn finish<W: Wearer + ?Sized>(
        &self,
        wearer: &mut W,
        slot: Option<RingSlot>,
        resolution: Resolution,
    ) -> RingOutcome {
        if resolution.kind.is_none() {
            return RingOutcome::Skipped(SkipReason::Unbound);
        }
        debug!(
            ?slot,
            kind = ?resolution.kind,
            match_count = resolution.match_count,
            level = resolution.signed_level(),
            remove = resolution.remove.is_some(),
            "resolved ring effect"
        );
        self.execute(wearer, &resolution);
        RingOutcome::resolved(resolution)
    }

    fn execute<W: Wearer + ?Sized>(&self, wearer: &mut W, resolution: &Resolution) {
        if let Some(kind) = &resolution.remove {
            debug!(%kind, "removing stale ring effect");
            wearer.remove_effect(kind);
        }
        if let Some(effect) = &resolution.apply {
            wearer.add_effect(effect.clone());
        }
    }

    fn wear_down<W: Wearer + ?Sized>(&self, wearer: &mut W, slot: RingSlot) -> DurabilityOutcome {
        let Some(ring) = wearer.ring_slot_mut(slot) else {
            return DurabilityOutcome::Untracked;
        };
        let outcome = consume_durability(ring);
        match outcome {
            DurabilityOutcome::Broken => {
                info!(%slot, "ring ran out of durability and broke");
                wearer.play_break_sound();
            }
            DurabilityOutcome::Decremented { remaining } => {
                debug!(%slot, remaining, "ring durability spent");
            }
            DurabilityOutcome::Untracked => {}
        }
        outcome
    }
}

fn checked_slot<W: Wearer + ?Sized>(wearer: &W, slot: RingSlot) -> Result<&Accessory> {
    let slots = wearer.ring_slots();
    slots.get(slot.0).ok_or(RuntimeError::SlotOutOfRange {
        slot,
        slots: slots.len(),
    })
}

fn authority_skip<W: Wearer + ?Sized>(wearer: &W) -> Option<SkipReason> {
    if !wearer.is_player_like() {
        Some(SkipReason::NotPlayerLike)
    } else if wearer.is_remote() {
        Some(SkipReason::Remote)
    } else {
        None
    }
}
