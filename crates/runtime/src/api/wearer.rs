//! Host-side view of an entity wearing rings.

use fingers_core::{Accessory, AppliedEffect, EffectKind, RingSlot, Tick};

/// Equipment, active-effect and world-cue access for one wearer.
///
/// The host guarantees single-threaded access for the duration of a
/// callback, so implementations need no locking.
pub trait Wearer {
    /// Whether the host tracks active effects for this entity.
    fn is_player_like(&self) -> bool;

    /// True when running in a client-side (non-authoritative) simulation.
    fn is_remote(&self) -> bool;

    /// Age of the wearer in ticks.
    fn ticks_existed(&self) -> Tick;

    /// Ring-category slots, in order. Empty slots hold [`Accessory::empty`].
    fn ring_slots(&self) -> &[Accessory];

    fn ring_slot_mut(&mut self, slot: RingSlot) -> Option<&mut Accessory>;

    fn active_effect(&self, kind: &EffectKind) -> Option<AppliedEffect>;

    fn add_effect(&mut self, effect: AppliedEffect);

    fn remove_effect(&mut self, kind: &EffectKind);

    /// Plays the item-break cue at the wearer's position.
    fn play_break_sound(&mut self);
}
