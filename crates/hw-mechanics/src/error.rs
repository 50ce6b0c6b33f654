//! Error types for the mechanics engine.

use hw_core::CoreError;

use crate::generation::GenerationMethod;

/// Errors that can occur during stat generation.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The selected slot or raw value is disabled, consumed, or out of range.
    /// The session is left untouched.
    #[error("invalid selection {index}: {reason}")]
    InvalidSelection {
        /// The rejected index.
        index: usize,
        /// Why it was rejected.
        reason: String,
    },

    /// `finalize` was called before every slot had a value.
    #[error("{0} session is not complete")]
    IncompleteSession(GenerationMethod),

    /// A configured Hardcore attempt cap ran out before a valid set appeared.
    #[error("no Hardcore set above 12 after {0} attempts")]
    RerollLimit(u32),

    /// A core data model error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
