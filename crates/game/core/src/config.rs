/// Ring tuning constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RingConfig {
    /// Duration (in ticks) of every effect a ring applies.
    pub effect_duration: u32,

    /// Number of ring slots a wearer exposes.
    pub ring_slots: usize,
}

impl RingConfig {
    // ===== compile-time constants used as type parameters =====
    /// Capacity of a wearer's active-effect table.
    pub const MAX_ACTIVE_EFFECTS: usize = 32;

    /// Highest amplifier reachable by stacking rings of the same effect.
    pub const MAX_AMPLIFIER: u8 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EFFECT_DURATION: u32 = 199;
    pub const DEFAULT_RING_SLOTS: usize = 2;

    pub fn new() -> Self {
        Self {
            effect_duration: Self::DEFAULT_EFFECT_DURATION,
            ring_slots: Self::DEFAULT_RING_SLOTS,
        }
    }

    pub fn with_effect_duration(effect_duration: u32) -> Self {
        Self {
            effect_duration,
            ..Self::new()
        }
    }

    /// Ticks between scheduled refreshes of a worn ring.
    ///
    /// Half the effect duration (integer division), so an effect is renewed
    /// well before it lapses. Never zero.
    pub fn refresh_rate(&self) -> u32 {
        (self.effect_duration / 2).max(1)
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_refresh_rate_is_half_duration_floored() {
        let config = RingConfig::default();
        assert_eq!(config.effect_duration, 199);
        assert_eq!(config.refresh_rate(), 99);
    }

    #[test]
    fn refresh_rate_never_zero() {
        assert_eq!(RingConfig::with_effect_duration(1).refresh_rate(), 1);
    }
}
