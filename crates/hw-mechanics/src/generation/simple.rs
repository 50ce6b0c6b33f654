//! Simple generation: everything starts at 12, one pick is raised to 17,
//! a second pick is lowered to 9.

use hw_core::Ability;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Starting value for every slot.
pub const BASE_SCORE: u32 = 12;
/// Value given to the first pick.
pub const HIGH_SCORE: u32 = 17;
/// Value given to the second pick.
pub const LOW_SCORE: u32 = 9;

/// Where a Simple session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimplePhase {
    /// Waiting for the slot to raise to 17.
    AwaitHighest,
    /// Waiting for the slot to lower to 9.
    AwaitLowest,
    /// Both picks made.
    Done,
}

impl SimplePhase {
    /// Prompt text for this phase.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::AwaitHighest => "Choose what attribute to raise to 17",
            Self::AwaitLowest => "Choose what attribute to lower to 9",
            Self::Done => "Finished!",
        }
    }
}

/// Two-pick state machine over the six ability slots.
#[derive(Debug, Clone)]
pub struct SimpleSession {
    values: [u32; 6],
    disabled: [bool; 6],
    phase: SimplePhase,
}

impl SimpleSession {
    /// All slots at 12, every slot selectable.
    pub fn new() -> Self {
        Self {
            values: [BASE_SCORE; 6],
            disabled: [false; 6],
            phase: SimplePhase::AwaitHighest,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> SimplePhase {
        self.phase
    }

    /// Whether a slot can be picked right now.
    pub fn is_selectable(&self, index: usize) -> bool {
        self.phase != SimplePhase::Done && self.disabled.get(index).is_some_and(|d| !d)
    }

    /// Pick a slot for the current phase.
    pub fn select(&mut self, index: usize) -> MechResult<()> {
        let reject = |reason: String| MechError::InvalidSelection { index, reason };
        let (value, next) = match self.phase {
            SimplePhase::AwaitHighest => (HIGH_SCORE, SimplePhase::AwaitLowest),
            SimplePhase::AwaitLowest => (LOW_SCORE, SimplePhase::Done),
            SimplePhase::Done => return Err(reject("both picks are already made".to_string())),
        };
        match self.disabled.get(index) {
            None => return Err(reject(format!("there is no slot {index}"))),
            Some(true) => {
                return Err(reject(format!(
                    "{} is already raised to 17",
                    Ability::ORDER[index]
                )));
            }
            Some(false) => {}
        }
        self.values[index] = value;
        if next == SimplePhase::Done {
            self.disabled = [true; 6];
        } else {
            self.disabled[index] = true;
        }
        self.phase = next;
        tracing::debug!(slot = %Ability::ORDER[index], phase = ?self.phase, "simple pick");
        Ok(())
    }

    /// Back to all 12s with both picks pending.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The six values in stat order. Every slot always holds a value.
    pub fn current_values(&self) -> [Option<u32>; 6] {
        self.values.map(Some)
    }

    /// True once both picks are made.
    pub fn is_complete(&self) -> bool {
        self.phase == SimplePhase::Done
    }
}

impl Default for SimpleSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(values: [Option<u32>; 6]) -> Vec<u32> {
        let mut v: Vec<u32> = values.into_iter().flatten().collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn starts_at_twelve() {
        let s = SimpleSession::new();
        assert_eq!(s.current_values(), [Some(12); 6]);
        assert_eq!(s.phase(), SimplePhase::AwaitHighest);
        assert!(!s.is_complete());
    }

    #[test]
    fn two_picks_complete_the_set() {
        let mut s = SimpleSession::new();
        s.select(0).unwrap();
        assert_eq!(s.phase(), SimplePhase::AwaitLowest);
        s.select(4).unwrap();
        assert!(s.is_complete());
        assert_eq!(
            s.current_values(),
            [Some(17), Some(12), Some(12), Some(12), Some(9), Some(12)]
        );
    }

    #[test]
    fn every_valid_pair_gives_the_same_multiset() {
        for high in 0..6 {
            for low in (0..6).filter(|l| *l != high) {
                let mut s = SimpleSession::new();
                s.select(high).unwrap();
                s.select(low).unwrap();
                assert_eq!(sorted(s.current_values()), vec![9, 12, 12, 12, 12, 17]);
            }
        }
    }

    #[test]
    fn same_slot_twice_is_rejected_without_change() {
        let mut s = SimpleSession::new();
        s.select(2).unwrap();
        let before = s.current_values();
        let err = s.select(2).unwrap_err();
        assert!(matches!(err, MechError::InvalidSelection { index: 2, .. }));
        assert_eq!(s.current_values(), before);
        assert_eq!(s.phase(), SimplePhase::AwaitLowest);
        // Untouched slots stay open.
        assert!(s.is_selectable(3));
    }

    #[test]
    fn picks_after_done_are_rejected() {
        let mut s = SimpleSession::new();
        s.select(1).unwrap();
        s.select(5).unwrap();
        let before = s.current_values();
        for i in 0..7 {
            assert!(!s.is_selectable(i));
            let err = s.select(i).unwrap_err();
            assert!(err.to_string().contains("both picks are already made"));
        }
        assert_eq!(s.current_values(), before);
        assert_eq!(s.phase(), SimplePhase::Done);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut s = SimpleSession::new();
        assert!(s.select(6).is_err());
        assert_eq!(s.phase(), SimplePhase::AwaitHighest);
    }

    #[test]
    fn reset_reopens_everything() {
        let mut s = SimpleSession::new();
        s.select(0).unwrap();
        s.select(1).unwrap();
        s.reset();
        assert_eq!(s.current_values(), [Some(12); 6]);
        assert_eq!(s.phase(), SimplePhase::AwaitHighest);
        assert!((0..6).all(|i| s.is_selectable(i)));
    }

    #[test]
    fn prompts() {
        assert_eq!(
            SimplePhase::AwaitHighest.prompt(),
            "Choose what attribute to raise to 17"
        );
        assert_eq!(SimplePhase::Done.prompt(), "Finished!");
    }
}
