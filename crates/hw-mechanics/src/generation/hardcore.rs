//! Hardcore generation: 3d6 straight down the stat block.
//!
//! A set whose best score is 12 or lower is thrown out and the whole block
//! is rolled again. Cheat dice do not apply.

use crate::dice::{DicePool, Die, DieSource};
use crate::error::{MechError, MechResult};

/// A set is kept only if at least one score is above this.
pub const KEEP_ABOVE: u32 = 12;

/// Roll one 3d6 block in stat order, with no validity check.
pub fn roll_3d6_block(dice: &mut impl DieSource) -> [u32; 6] {
    let pool = DicePool::new().add(Die::D6, 3);
    std::array::from_fn(|_| pool.roll(dice).total())
}

/// Roll blocks until one has a score above [`KEEP_ABOVE`].
///
/// `max_attempts: None` loops until success. `Some(n)` gives up with
/// [`MechError::RerollLimit`] after `n` rejected blocks; a cap of 0 counts
/// as 1. Returns the kept block and how many blocks were rolled in total.
pub fn roll_hardcore_set(
    dice: &mut impl DieSource,
    max_attempts: Option<u32>,
) -> MechResult<([u32; 6], u32)> {
    let max_attempts = max_attempts.map(|cap| cap.max(1));
    let mut attempts = 0;
    loop {
        if let Some(cap) = max_attempts.filter(|cap| attempts >= *cap) {
            tracing::warn!(cap, "hardcore attempt cap exhausted");
            return Err(MechError::RerollLimit(cap));
        }
        attempts += 1;
        let block = roll_3d6_block(dice);
        let best = block.iter().copied().max().unwrap_or(0);
        if best > KEEP_ABOVE {
            tracing::debug!(?block, attempts, "hardcore set kept");
            return Ok((block, attempts));
        }
        tracing::debug!(?block, "hardcore set discarded");
    }
}

/// A Hardcore result. There are no choices to make; the only action is a
/// full reroll.
#[derive(Debug, Clone)]
pub struct HardcoreSession {
    values: [u32; 6],
    attempts: u32,
    max_attempts: Option<u32>,
}

impl HardcoreSession {
    /// Roll a fresh valid set.
    pub fn roll(dice: &mut impl DieSource, max_attempts: Option<u32>) -> MechResult<Self> {
        let (values, attempts) = roll_hardcore_set(dice, max_attempts)?;
        Ok(Self {
            values,
            attempts,
            max_attempts,
        })
    }

    /// The six scores in stat order.
    pub fn values(&self) -> [u32; 6] {
        self.values
    }

    /// How many blocks were rolled to reach the current set.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Replace the set with a new valid one. On error the old set is kept.
    pub fn reroll(&mut self, dice: &mut impl DieSource) -> MechResult<()> {
        let (values, attempts) = roll_hardcore_set(dice, self.max_attempts)?;
        self.values = values;
        self.attempts = attempts;
        Ok(())
    }
}
