//! Unified error types surfaced by the runtime API.

use fingers_core::{ErrorSeverity, RingError, RingSlot};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{slot} is out of range for a wearer with {slots} ring slots")]
    SlotOutOfRange { slot: RingSlot, slots: usize },

    #[error("failed to load built-in ring content")]
    Content(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RingError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SlotOutOfRange { .. } => ErrorSeverity::Validation,
            Self::Content(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SlotOutOfRange { .. } => "RUNTIME_SLOT_OUT_OF_RANGE",
            Self::Content(_) => "RUNTIME_CONTENT",
        }
    }
}
