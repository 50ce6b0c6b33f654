//! 4d6-drop-lowest generation with caller-directed assignment.
//!
//! Six raw values are rolled up front. The caller then consumes them one at
//! a time; each consumed value fills the next empty slot in stat order.

use hw_core::Ability;

use crate::cheat::CheatState;
use crate::dice::{DicePool, Die, DieSource};
use crate::error::{MechError, MechResult};

/// Roll four biased d6, drop one copy of the lowest, and sum the rest.
pub fn roll_four_d6(dice: &mut impl DieSource, cheat: &CheatState) -> u32 {
    let result = DicePool::new().add(Die::D6, 4).roll_biased(dice, cheat);
    let value = result.total_drop_lowest();
    tracing::debug!(dice = %result, value, cheat = %cheat.active(), "4d6 drop lowest");
    value
}

/// Roll six independent raw values.
pub fn roll_four_d6_set(dice: &mut impl DieSource, cheat: &CheatState) -> [u32; 6] {
    std::array::from_fn(|_| roll_four_d6(dice, cheat))
}

/// A rolled pool plus the assignment in progress.
#[derive(Debug, Clone)]
pub struct FourD6Session {
    pool: [u32; 6],
    consumed: [bool; 6],
    slots: [Option<u32>; 6],
}

impl FourD6Session {
    /// Roll a fresh pool.
    pub fn roll(dice: &mut impl DieSource, cheat: &CheatState) -> Self {
        Self::from_pool(roll_four_d6_set(dice, cheat))
    }

    /// Start an assignment over an already-rolled pool.
    pub fn from_pool(pool: [u32; 6]) -> Self {
        Self {
            pool,
            consumed: [false; 6],
            slots: [None; 6],
        }
    }

    /// The six raw values, in roll order.
    pub fn raw_pool(&self) -> [u32; 6] {
        self.pool
    }

    /// Which raw values can still be picked.
    pub fn available(&self) -> [bool; 6] {
        self.consumed.map(|c| !c)
    }

    /// The ability that the next pick will fill, or `None` when done.
    pub fn next_slot(&self) -> Option<Ability> {
        self.slots
            .iter()
            .position(Option::is_none)
            .map(|i| Ability::ORDER[i])
    }

    /// Consume raw value `raw_index` into the next empty slot.
    pub fn select(&mut self, raw_index: usize) -> MechResult<()> {
        let reject = |reason: String| MechError::InvalidSelection {
            index: raw_index,
            reason,
        };
        let Some(slot) = self.next_slot() else {
            return Err(reject("every slot is already filled".to_string()));
        };
        match self.consumed.get(raw_index) {
            None => return Err(reject(format!("there is no raw value {raw_index}"))),
            Some(true) => {
                return Err(reject(format!(
                    "raw value {} is already used",
                    self.pool[raw_index]
                )));
            }
            Some(false) => {}
        }
        self.consumed[raw_index] = true;
        self.slots[slot.index()] = Some(self.pool[raw_index]);
        tracing::debug!(%slot, value = self.pool[raw_index], "4d6 assignment");
        Ok(())
    }

    /// Draw six new raw values and clear the assignment.
    pub fn reroll(&mut self, dice: &mut impl DieSource, cheat: &CheatState) {
        *self = Self::roll(dice, cheat);
    }

    /// Keep the raw values but clear the assignment.
    pub fn reset(&mut self) {
        *self = Self::from_pool(self.pool);
    }

    /// Assigned values in stat order; `None` for slots not yet filled.
    pub fn current_values(&self) -> [Option<u32>; 6] {
        self.slots
    }

    /// True once all six slots hold a value.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
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
    fn drops_exactly_one_lowest() {
        let cheat = CheatState::new();
        let mut dice = ScriptedDice::new([3, 1, 1, 6]);
        assert_eq!(roll_four_d6(&mut dice, &cheat), 10);
        assert_eq!(dice.drawn(), 4);
    }

    #[test]
    fn ones_to_sixes_before_drop() {
        let cheat = CheatState::with_mode(CheatMode::OnesToSixes);
        let mut dice = ScriptedDice::new([1, 1, 1, 2]);
        // 6, 6, 6, 2 -> drop the 2.
        assert_eq!(roll_four_d6(&mut dice, &cheat), 18);
    }

    #[test]
    fn reroll_low_consumes_extra_dice() {
        let cheat = CheatState::with_mode(CheatMode::RerollLow);
        let mut dice = ScriptedDice::new([2, 5, 4, 4, 1, 3]);
        // 2 -> 5, 4, 4, 1 -> 3: [5, 4, 4, 3] drop 3.
        assert_eq!(roll_four_d6(&mut dice, &cheat), 13);
        assert_eq!(dice.drawn(), 6);
    }

    #[test]
    fn assignment_fills_slots_in_order() {
        let mut s = FourD6Session::from_pool([15, 8, 12, 17, 10, 13]);
        assert_eq!(s.next_slot(), Some(Ability::Strength));
        s.select(3).unwrap();
        s.select(0).unwrap();
        assert_eq!(s.next_slot(), Some(Ability::Constitution));
        assert_eq!(
            s.current_values(),
            [Some(17), Some(15), None, None, None, None]
        );
        assert_eq!(s.available(), [false, true, true, false, true, true]);
        for i in [5, 2, 4, 1] {
            s.select(i).unwrap();
        }
        assert!(s.is_complete());
        assert_eq!(s.next_slot(), None);
        assert_eq!(
            s.current_values(),
            [Some(17), Some(15), Some(13), Some(12), Some(10), Some(8)]
        );
    }

    #[test]
    fn consumed_value_rejected_without_change() {
        let mut s = FourD6Session::from_pool([15, 8, 12, 17, 10, 13]);
        s.select(1).unwrap();
        let before = s.current_values();
        let err = s.select(1).unwrap_err();
        assert!(matches!(err, MechError::InvalidSelection { index: 1, .. }));
        assert_eq!(s.current_values(), before);
        assert!(s.select(6).is_err());
        assert_eq!(s.current_values(), before);
    }

    #[test]
    fn reset_keeps_raw_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut s = FourD6Session::roll(&mut rng, &CheatState::new());
        let pool = s.raw_pool();
        s.select(2).unwrap();
        s.select(4).unwrap();
        s.reset();
        assert_eq!(s.current_values(), [None; 6]);
        assert_eq!(s.raw_pool(), pool);
        assert_eq!(s.available(), [true; 6]);
    }

    #[test]
    fn reroll_draws_new_pool_and_clears() {
        let mut s = FourD6Session::from_pool([3; 6]);
        s.select(0).unwrap();
        let mut dice = ScriptedDice::new([6]);
        s.reroll(&mut dice, &CheatState::new());
        assert_eq!(s.raw_pool(), [18; 6]);
        assert_eq!(s.current_values(), [None; 6]);
        assert_eq!(dice.drawn(), 24);
    }

    #[test]
    fn seeded_raw_values_in_range() {
        let mut rng = StdRng::seed_from_u64(77);
        for mode in CheatMode::ALL {
            let cheat = CheatState::with_mode(mode);
            for _ in 0..100 {
                let v = roll_four_d6(&mut rng, &cheat);
                assert!((3..=18).contains(&v), "{v} out of range under mode {mode}");
            }
        }
    }
}
