//! In-memory host implementations for testing and development.

mod wearer;

pub use wearer::SimulatedWearer;
