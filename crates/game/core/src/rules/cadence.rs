//! Refresh cadence for worn rings.

use crate::config::RingConfig;
use crate::state::Tick;

/// Decides when a worn ring re-runs resolution.
///
/// A ring refreshes on every multiple of the refresh rate of the wearer's
/// age, and immediately whenever its effect is no longer active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshCadence {
    rate: u32,
}

impl RefreshCadence {
    pub fn new(config: &RingConfig) -> Self {
        Self {
            rate: config.refresh_rate(),
        }
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// True on scheduled refresh ticks.
    pub fn is_scheduled(&self, ticks_existed: Tick) -> bool {
        ticks_existed.0 % u64::from(self.rate) == 0
    }

    /// True if a ring should refresh on this tick.
    pub fn should_refresh(&self, ticks_existed: Tick, effect_active: bool) -> bool {
        self.is_scheduled(ticks_existed) || !effect_active
    }
}

impl Default for RefreshCadence {
    fn default() -> Self {
        Self::new(&RingConfig::default())
    }
}
