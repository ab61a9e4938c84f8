//! Host adapter for ring behaviour.
//!
//! This crate connects the pure rules in `fingers-core` to a host engine.
//! The host implements [`Wearer`] for the entity wearing rings and forwards
//! its equip, unequip and worn-tick callbacks to [`RingBehavior`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the traits and errors host adapters implement against
//! - [`behavior`] runs resolution and executes its instructions
//! - [`memory`] provides an in-memory wearer reused by tests and tools
pub mod api;
pub mod behavior;
pub mod memory;

pub use api::{Result, RuntimeError, Wearer};
pub use behavior::{RingBehavior, RingOutcome, SkipReason};
pub use memory::SimulatedWearer;
