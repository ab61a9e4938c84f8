//! Ring rules evaluated on equip, unequip and worn ticks.
//!
//! Everything here is a pure function of its inputs: the wearer's slots, the
//! subject ring, the current active effect and the tuning config. Executing
//! the resulting instructions against the host is the adapter's job.
//!
//! # Modules
//!
//! - [`resolver`]: effect kind, stacking level and remove/apply instructions
//! - [`cadence`]: when a worn ring re-evaluates
//! - [`durability`]: wear-out bookkeeping after a successful apply

pub mod cadence;
pub mod durability;
pub mod resolver;

pub use cadence::RefreshCadence;
pub use durability::{DurabilityBar, DurabilityOutcome, consume_durability};
pub use resolver::{EffectLevelResolver, Resolution, ResolveQuery};
