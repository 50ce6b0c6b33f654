//! Dice types, pools, and rolling.
//!
//! Every random draw in the engine goes through a [`DieSource`]. `StdRng`
//! is the production source; [`ScriptedDice`] replays a fixed sequence so
//! tests can pin exact outcomes.

pub mod pool;
pub mod roll;
pub mod source;

pub use pool::DicePool;
pub use roll::RollResult;
pub use source::{DieSource, ScriptedDice};

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Six-sided die.
    D6,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D6 => write!(f, "d6"),
            Self::D100 => write!(f, "d100"),
            Self::Custom(n) => write!(f, "d{n}"),
        }
    }
}
