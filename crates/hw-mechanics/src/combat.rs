//! Monster combat decisions.
//!
//! Each turn a monster rolls three percentile dice, adds its aggression,
//! awareness, and fear to them, and acts on the largest total. Ties go to
//! attacking first, then healing.

use hw_core::Monster;
use serde::{Deserialize, Serialize};

use crate::dice::{Die, DieSource};

/// The action a monster takes on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatChoice {
    /// Strike the opponent.
    Attack,
    /// Recover (drink a potion if one is left).
    Heal,
    /// Run away.
    Flee,
}

impl std::fmt::Display for CombatChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack => write!(f, "attack"),
            Self::Heal => write!(f, "heal"),
            Self::Flee => write!(f, "flee"),
        }
    }
}

/// A decision together with the numbers behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatDecision {
    /// The chosen action.
    pub choice: CombatChoice,
    /// Percentile roll plus aggression.
    pub attack_value: u32,
    /// Percentile roll plus awareness.
    pub heal_value: u32,
    /// Percentile roll plus fear.
    pub flee_value: u32,
}

/// Pick an action from three biased totals.
///
/// Totals saturate at `u32::MAX`, so an unbounded bias still ranks first.
/// Attack wins any tie it is part of; Heal wins a tie with Flee.
pub fn decide(attack_value: u32, heal_value: u32, flee_value: u32) -> CombatChoice {
    if attack_value >= heal_value && attack_value >= flee_value {
        CombatChoice::Attack
    } else if heal_value >= flee_value {
        CombatChoice::Heal
    } else {
        CombatChoice::Flee
    }
}

/// Roll the three percentile dice and decide, returning the full breakdown.
pub fn roll_decision(
    aggression: u32,
    awareness: u32,
    fear: u32,
    dice: &mut impl DieSource,
) -> CombatDecision {
    let attack_value = dice.roll(Die::D100).saturating_add(aggression);
    let heal_value = dice.roll(Die::D100).saturating_add(awareness);
    let flee_value = dice.roll(Die::D100).saturating_add(fear);
    let choice = decide(attack_value, heal_value, flee_value);
    tracing::debug!(attack_value, heal_value, flee_value, %choice, "combat decision");
    CombatDecision {
        choice,
        attack_value,
        heal_value,
        flee_value,
    }
}

/// Choose an action for the given tendencies.
pub fn choose_action(
    aggression: u32,
    awareness: u32,
    fear: u32,
    dice: &mut impl DieSource,
) -> CombatChoice {
    roll_decision(aggression, awareness, fear, dice).choice
}

/// Choose an action using a monster's own tendencies.
pub fn monster_turn(monster: &Monster, dice: &mut impl DieSource) -> CombatDecision {
    roll_decision(monster.aggression, monster.awareness, monster.fear, dice)
}
