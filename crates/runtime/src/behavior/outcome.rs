//! Results reported by ring callbacks.

use fingers_core::{DurabilityOutcome, Resolution};

/// Why a callback did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The wearer has no active-effect bookkeeping.
    NotPlayerLike,
    /// Client-side simulation; only the authoritative side mutates.
    Remote,
    /// The ring is empty, unbound, or bound to an unknown effect.
    Unbound,
    /// Worn tick between scheduled refreshes with the effect still active.
    NotScheduled,
}

/// Outcome of one equip, unequip or worn-tick callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RingOutcome {
    Skipped(SkipReason),
    Resolved {
        resolution: Resolution,
        durability: DurabilityOutcome,
    },
}

impl RingOutcome {
    pub(crate) fn resolved(resolution: Resolution) -> Self {
        Self::Resolved {
            resolution,
            durability: DurabilityOutcome::Untracked,
        }
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            Self::Resolved { resolution, .. } => Some(resolution),
            Self::Skipped(_) => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// True if the ring broke during this callback.
    pub fn ring_broke(&self) -> bool {
        matches!(
            self,
            Self::Resolved {
                durability: DurabilityOutcome::Broken,
                ..
            }
        )
    }
}
