//! Active status effects on a wearer.
//!
//! The host owns this table; rings only ask it for the current effect of a
//! kind and hand it add/remove instructions. Durations count down in ticks
//! and an effect is dropped once its remaining duration reaches zero.

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::RingConfig;
use crate::state::types::EffectKind;

bitflags! {
    /// Presentation flags carried by an applied effect.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EffectFlags: u8 {
        /// Passively granted (beacon/ring style) rather than consumed.
        const AMBIENT        = 1 << 0;
        /// Emit swirl particles around the wearer.
        const SHOW_PARTICLES = 1 << 1;
    }
}

impl EffectFlags {
    /// Flags for effects granted by worn rings: ambient, no particles.
    pub const SILENT_AMBIENT: Self = Self::AMBIENT;

    /// Flags for effects from direct consumption.
    pub const CONSUMED: Self = Self::SHOW_PARTICLES;
}

/// A wearer's active instance of an effect kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedEffect {
    pub kind: EffectKind,
    /// Zero-based intensity level.
    pub amplifier: u8,
    /// Remaining duration in ticks.
    pub duration: u32,
    pub flags: EffectFlags,
}

impl AppliedEffect {
    pub fn new(kind: EffectKind, amplifier: u8, duration: u32, flags: EffectFlags) -> Self {
        Self {
            kind,
            amplifier,
            duration,
            flags,
        }
    }

    pub fn is_ambient(&self) -> bool {
        self.flags.contains(EffectFlags::AMBIENT)
    }

    pub fn shows_particles(&self) -> bool {
        self.flags.contains(EffectFlags::SHOW_PARTICLES)
    }

    /// Folds a newly applied instance of the same kind into this one.
    ///
    /// A stronger amplifier replaces everything. An equal amplifier only
    /// extends the duration. A weaker amplifier never overwrites a stronger
    /// one, so the stronger effect has to be removed explicitly.
    fn combine(&mut self, other: AppliedEffect) {
        if other.amplifier > self.amplifier {
            *self = other;
        } else if other.amplifier == self.amplifier && self.duration < other.duration {
            self.duration = other.duration;
            self.flags = other.flags;
        } else if !other.is_ambient() && self.is_ambient() {
            self.flags.remove(EffectFlags::AMBIENT);
        }
    }
}

/// Active status effects on a wearer, at most one per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffects {
    effects: ArrayVec<AppliedEffect, { RingConfig::MAX_ACTIVE_EFFECTS }>,
}

impl ActiveEffects {
    /// Creates an empty effect table.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Returns the active effect of `kind`, if any.
    pub fn get(&self, kind: &EffectKind) -> Option<&AppliedEffect> {
        self.effects
            .iter()
            .find(|e| &e.kind == kind && e.duration > 0)
    }

    /// Checks if an effect of `kind` is active.
    pub fn has(&self, kind: &EffectKind) -> bool {
        self.get(kind).is_some()
    }

    /// Adds an effect, combining with an existing effect of the same kind.
    ///
    /// Returns false if the table is full and the effect was dropped.
    #[must_use]
    pub fn add(&mut self, effect: AppliedEffect) -> bool {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            existing.combine(effect);
            return true;
        }

        self.effects.try_push(effect).is_ok()
    }

    /// Removes an effect immediately, returning it if it was present.
    pub fn remove(&mut self, kind: &EffectKind) -> Option<AppliedEffect> {
        let index = self.effects.iter().position(|e| &e.kind == kind)?;
        Some(self.effects.remove(index))
    }

    /// Counts every effect down by `ticks` and drops the ones that ran out.
    pub fn tick(&mut self, ticks: u32) {
        for effect in self.effects.iter_mut() {
            effect.duration = effect.duration.saturating_sub(ticks);
        }
        self.effects.retain(|e| e.duration > 0);
    }

    /// Returns an iterator over all active effects.
    pub fn iter(&self) -> impl Iterator<Item = &AppliedEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
