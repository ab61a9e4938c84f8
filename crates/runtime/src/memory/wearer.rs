//! In-memory wearer for tests and local runs.

use fingers_core::{
    Accessory, ActiveEffects, AppliedEffect, EffectKind, RingConfig, RingSlot, Tick,
};

use tracing::warn;

use crate::api::Wearer;

/// In-memory implementation of [`Wearer`].
///
/// Holds its own ring slots and active-effect table and counts break cues
/// instead of playing them.
#[derive(Clone, Debug)]
pub struct SimulatedWearer {
    slots: Vec<Accessory>,
    effects: ActiveEffects,
    ticks_existed: Tick,
    player_like: bool,
    remote: bool,
    break_sounds: u32,
}

impl SimulatedWearer {
    /// A player-like, authoritative wearer with `slot_count` empty ring slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![Accessory::empty(); slot_count],
            effects: ActiveEffects::empty(),
            ticks_existed: Tick::ZERO,
            player_like: true,
            remote: false,
            break_sounds: 0,
        }
    }

    /// A wearer with the slot count from `config`.
    pub fn for_config(config: &RingConfig) -> Self {
        Self::new(config.ring_slots)
    }

    #[must_use]
    pub fn with_player_like(mut self, player_like: bool) -> Self {
        self.player_like = player_like;
        self
    }

    #[must_use]
    pub fn with_remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    #[must_use]
    pub fn with_ticks_existed(mut self, ticks: Tick) -> Self {
        self.ticks_existed = ticks;
        self
    }

    /// Puts `ring` into `slot`, returning what was there.
    ///
    /// Returns `None` if the slot does not exist.
    pub fn put(&mut self, slot: RingSlot, ring: Accessory) -> Option<Accessory> {
        let target = self.slots.get_mut(slot.0)?;
        Some(std::mem::replace(target, ring))
    }

    /// Takes the ring out of `slot`, leaving it empty.
    pub fn take(&mut self, slot: RingSlot) -> Option<Accessory> {
        let target = self.slots.get_mut(slot.0)?;
        Some(std::mem::take(target))
    }

    /// Advances one tick: ages the wearer and counts effects down.
    pub fn advance_tick(&mut self) {
        self.ticks_existed = self.ticks_existed + 1;
        self.effects.tick(1);
    }

    pub fn effects(&self) -> &ActiveEffects {
        &self.effects
    }

    pub fn break_sounds(&self) -> u32 {
        self.break_sounds
    }
}

impl Wearer for SimulatedWearer {
    fn is_player_like(&self) -> bool {
        self.player_like
    }

    fn is_remote(&self) -> bool {
        self.remote
    }

    fn ticks_existed(&self) -> Tick {
        self.ticks_existed
    }

    fn ring_slots(&self) -> &[Accessory] {
        &self.slots
    }

    fn ring_slot_mut(&mut self, slot: RingSlot) -> Option<&mut Accessory> {
        self.slots.get_mut(slot.0)
    }

    fn active_effect(&self, kind: &EffectKind) -> Option<AppliedEffect> {
        self.effects.get(kind).cloned()
    }

    fn add_effect(&mut self, effect: AppliedEffect) {
        let kind = effect.kind.clone();
        if !self.effects.add(effect) {
            warn!(
                %kind,
                capacity = RingConfig::MAX_ACTIVE_EFFECTS,
                "active-effect table full, effect dropped"
            );
        }
    }

    fn remove_effect(&mut self, kind: &EffectKind) {
        self.effects.remove(kind);
    }

    fn play_break_sound(&mut self) {
        self.break_sounds += 1;
    }
}
