use crate::ability::Ability;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building characters or ability sets.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A finalized ability score fell outside 3..=18.
    #[error("{ability} score {value} is outside 3..=18")]
    ScoreOutOfRange {
        /// The ability that carried the bad value.
        ability: Ability,
        /// The rejected value.
        value: u32,
    },

    /// Maximum health must be at least 1.
    #[error("maximum health must be at least 1, got {0}")]
    InvalidMaxHealth(i32),
}
