//! Wear-out bookkeeping for rings that carry a durability counter.
//!
//! Each successful (re)apply through such a ring costs one point. When no
//! points are left the ring breaks: its stack count drops to zero and the
//! host plays the break cue.

use crate::state::Accessory;

/// What happened to a ring's durability after an apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurabilityOutcome {
    /// The ring has no durability counter.
    Untracked,
    /// One point was spent.
    Decremented { remaining: u32 },
    /// The ring ran out and was destroyed.
    Broken,
}

impl DurabilityOutcome {
    pub fn is_broken(&self) -> bool {
        matches!(self, Self::Broken)
    }
}

/// Spends one durability point of `ring`.
///
/// Call only after the resolver decided to apply an effect through `ring`.
pub fn consume_durability(ring: &mut Accessory) -> DurabilityOutcome {
    match ring.durability() {
        None => DurabilityOutcome::Untracked,
        Some(0) => {
            ring.destroy();
            DurabilityOutcome::Broken
        }
        Some(durability) => {
            let remaining = durability - 1;
            ring.set_durability(remaining);
            DurabilityOutcome::Decremented { remaining }
        }
    }
}

/// Durability bar shown on rings that wear out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DurabilityBar {
    /// Points spent so far.
    pub damage: u32,
    pub max: u32,
}

impl DurabilityBar {
    /// Bar for `ring`, or `None` for rings that do not wear out.
    pub fn of(ring: &Accessory) -> Option<Self> {
        let durability = ring.durability()?;
        let max = ring.max_durability().filter(|max| *max > 0)?;
        Some(Self {
            damage: max.saturating_sub(durability),
            max,
        })
    }

    /// Fraction of the bar that is used up, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        f64::from(self.damage) / f64::from(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EffectKind;

    fn speed_ring() -> Accessory {
        Accessory::for_effect(&EffectKind::parse("speed"))
    }

    #[test]
    fn ring_without_counter_is_untracked() {
        let mut ring = speed_ring();
        assert_eq!(consume_durability(&mut ring), DurabilityOutcome::Untracked);
        assert_eq!(ring.count(), 1);
    }

    #[test]
    fn spends_one_point() {
        let mut ring = speed_ring().with_durability(5);
        assert_eq!(
            consume_durability(&mut ring),
            DurabilityOutcome::Decremented { remaining: 4 }
        );
        assert_eq!(ring.durability(), Some(4));
        assert_eq!(ring.max_durability(), Some(5));
    }

    #[test]
    fn zero_durability_breaks() {
        let mut ring = speed_ring().with_durability(0);
        assert!(consume_durability(&mut ring).is_broken());
        assert!(ring.is_empty());
        assert_eq!(consume_durability(&mut ring), DurabilityOutcome::Untracked);
    }

    #[test]
    fn bar_tracks_spent_points() {
        let mut ring = speed_ring().with_durability(4);
        consume_durability(&mut ring);
        let bar = DurabilityBar::of(&ring).unwrap();
        assert_eq!(bar.damage, 1);
        assert_eq!(bar.fraction(), 0.25);
        assert!(DurabilityBar::of(&speed_ring()).is_none());
    }
}
