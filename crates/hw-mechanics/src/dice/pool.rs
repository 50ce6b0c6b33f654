//! Dice pool construction and rolling.

use crate::cheat::CheatState;

use super::roll::RollResult;
use super::{Die, DieSource};

/// A collection of dice to be rolled together.
#[derive(Debug, Clone, Default)]
pub struct DicePool {
    /// The dice in this pool.
    pub dice: Vec<Die>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Add `count` dice of the given type.
    pub fn add(mut self, die: Die, count: u32) -> Self {
        for _ in 0..count {
            self.dice.push(die);
        }
        self
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Roll all dice in the pool with no cheat bias.
    pub fn roll(&self, dice: &mut impl DieSource) -> RollResult {
        let values = self.dice.iter().map(|die| dice.roll(*die)).collect();
        RollResult { values }
    }

    /// Roll all dice, passing each d6 through the active cheat mode.
    ///
    /// The mode is read once per die, so a toggle between rolls is honored
    /// on the very next die.
    pub fn roll_biased(&self, dice: &mut impl DieSource, cheat: &CheatState) -> RollResult {
        let values = self
            .dice
            .iter()
            .map(|die| match die {
                Die::D6 => cheat.roll_d6(dice),
                other => dice.roll(*other),
            })
            .collect();
        RollResult { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cheat::CheatMode;
    use crate::dice::ScriptedDice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert_eq!(pool.count(), 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn add_dice() {
        let pool = DicePool::new().add(Die::D6, 4).add(Die::D100, 1);
        assert_eq!(pool.count(), 5);
        assert!(!pool.is_empty());
    }

    #[test]
    fn roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = DicePool::new().add(Die::D6, 10);
        let result = pool.roll(&mut rng);
        assert_eq!(result.count(), 10);
        for value in &result.values {
            assert!((1..=6).contains(value));
        }
    }

    #[test]
    fn roll_biased_applies_cheat_to_d6() {
        let mut dice = ScriptedDice::new([1, 2, 1, 6]);
        let cheat = CheatState::with_mode(CheatMode::OnesToSixes);
        let result = DicePool::new().add(Die::D6, 4).roll_biased(&mut dice, &cheat);
        assert_eq!(result.values, vec![6, 2, 6, 6]);
    }

    #[test]
    fn roll_ignores_cheat() {
        let mut dice = ScriptedDice::new([1, 1, 1]);
        let result = DicePool::new().add(Die::D6, 3).roll(&mut dice);
        assert_eq!(result.total(), 3);
    }
}
