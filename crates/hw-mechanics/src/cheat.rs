//! Cheat dice: a five-step bias applied to individual d6 results.
//!
//! The active mode lives in a [`CheatState`] owned by the caller and is
//! passed by reference into every biased roll. Only methods that roll
//! individual d6 dice (4d6-drop-lowest) consult it.

use serde::{Deserialize, Serialize};

use crate::dice::{Die, DieSource};

/// A die-bias mode. Cycles 0 → 1 → 2 → 3 → 4 → 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheatMode {
    /// 0: dice are left alone.
    #[default]
    Off,
    /// 1: every die is discarded and drawn again once. Still uniform.
    RerollAll,
    /// 2: a 1 becomes a 6.
    OnesToSixes,
    /// 3: a 1 or 2 is drawn again once.
    RerollLow,
    /// 4: a 1 or 2 is flipped to the opposite face (1 → 6, 2 → 5).
    FlipLow,
}

impl CheatMode {
    /// Every mode, in toggle order.
    pub const ALL: [CheatMode; 5] = [
        Self::Off,
        Self::RerollAll,
        Self::OnesToSixes,
        Self::RerollLow,
        Self::FlipLow,
    ];

    /// Numeric mode (0-4).
    pub fn index(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::RerollAll => 1,
            Self::OnesToSixes => 2,
            Self::RerollLow => 3,
            Self::FlipLow => 4,
        }
    }

    /// Look up a mode by number.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The mode after this one, wrapping from 4 back to 0.
    pub fn next(self) -> Self {
        Self::ALL[(usize::from(self.index()) + 1) % Self::ALL.len()]
    }

    /// Short human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Off => "No Cheats Activated",
            Self::RerollAll => "All dice are rerolled once",
            Self::OnesToSixes => "All 1's are converted to 6's",
            Self::RerollLow => "Reroll all 1's and 2's",
            Self::FlipLow => "All 1's are converted to 6's and all 2's are converted to 5's",
        }
    }

    /// The line shown when this mode becomes active.
    pub fn announcement(self) -> String {
        match self {
            Self::Off => self.description().to_string(),
            other => format!("Cheat {} enabled! {}", other.index(), other.description()),
        }
    }

    /// Apply this mode to a raw d6 face, drawing from `dice` if the mode
    /// calls for a reroll.
    pub fn apply(self, raw: u32, dice: &mut impl DieSource) -> u32 {
        match self {
            Self::Off => raw,
            Self::RerollAll => dice.roll(Die::D6),
            Self::OnesToSixes if raw == 1 => 6,
            Self::RerollLow if raw <= 2 => dice.roll(Die::D6),
            Self::FlipLow if raw <= 2 => 7 - raw,
            Self::OnesToSixes | Self::RerollLow | Self::FlipLow => raw,
        }
    }
}

impl std::fmt::Display for CheatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Holder for the session-wide cheat mode.
#[derive(Debug, Clone, Default)]
pub struct CheatState {
    mode: CheatMode,
}

impl CheatState {
    /// Start with cheats off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in a specific mode.
    pub fn with_mode(mode: CheatMode) -> Self {
        Self { mode }
    }

    /// The mode currently in effect.
    pub fn active(&self) -> CheatMode {
        self.mode
    }

    /// Advance to the next mode and return its announcement.
    pub fn toggle(&mut self) -> String {
        self.mode = self.mode.next();
        let announcement = self.mode.announcement();
        tracing::info!(mode = self.mode.index(), "{announcement}");
        announcement
    }

    /// Roll one d6 and bias it with the mode active right now.
    pub fn roll_d6(&self, dice: &mut impl DieSource) -> u32 {
        let raw = dice.roll(Die::D6);
        self.mode.apply(raw, dice)
    }
}
