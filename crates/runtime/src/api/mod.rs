//! Public API surface for host adapters.
//!
//! - [`Wearer`] is the narrow view of the host entity a ring is worn by
//! - [`RuntimeError`] is the error type every callback returns

mod errors;
mod wearer;

pub use errors::{Result, RuntimeError};
pub use wearer::Wearer;
