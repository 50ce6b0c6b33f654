//! Randomized monsters.
//!
//! The presets in `hw_core::Monster` are fixed; these builders start from
//! a preset and draw per-instance values from a [`DieSource`].

use std::num::NonZeroU32;

use hw_core::{Monster, MonsterKind};

use crate::dice::DieSource;

/// An Orc with rolled tendencies and physical stats.
///
/// Aggression 60-100, awareness 10-40, fear 5-30, strength, dexterity and
/// intelligence 6-10, max health 8-12.
pub fn random_orc(dice: &mut impl DieSource) -> Monster {
    let mut orc = Monster::orc();
    orc.aggression = dice.range(60, 100);
    orc.awareness = dice.range(10, 40);
    orc.fear = dice.range(5, 30);
    let abilities = &mut orc.character.abilities;
    abilities.strength = dice.range(6, 10);
    abilities.dexterity = dice.range(6, 10);
    abilities.intelligence = dice.range(6, 10);
    orc.character.set_health_pool(roll_health_pool(dice, 8, 12));
    orc
}

/// A WrathMan with rolled health and tendencies. Fear stays at 0.
///
/// Max health 18-26, aggression and awareness 40-60.
pub fn random_wrath_man(dice: &mut impl DieSource) -> Monster {
    let mut wrath = Monster::wrath_man();
    wrath.character.set_health_pool(roll_health_pool(dice, 18, 26));
    wrath.aggression = dice.range(40, 60);
    wrath.awareness = dice.range(40, 60);
    wrath
}

/// One of the three stock presets, picked uniformly.
pub fn random_monster(dice: &mut impl DieSource) -> Monster {
    let monster = match dice.range(1, 3) {
        1 => Monster::generic(),
        2 => Monster::orc(),
        _ => Monster::wrath_man(),
    };
    tracing::debug!(kind = %monster.kind, name = monster.name(), "random monster");
    monster
}

/// Build a monster of `kind`, rolling its values when `randomized` is set.
/// Generic monsters have no randomized form.
pub fn spawn(kind: MonsterKind, randomized: bool, dice: &mut impl DieSource) -> Monster {
    match (kind, randomized) {
        (MonsterKind::Generic, _) => Monster::generic(),
        (MonsterKind::Orc, false) => Monster::orc(),
        (MonsterKind::Orc, true) => random_orc(dice),
        (MonsterKind::WrathMan, false) => Monster::wrath_man(),
        (MonsterKind::WrathMan, true) => random_wrath_man(dice),
    }
}

/// Draw a max health in `low..=high`. `range` never yields 0, and a 0
/// `low` still lands on 1.
fn roll_health_pool(dice: &mut impl DieSource, low: u32, high: u32) -> NonZeroU32 {
    NonZeroU32::MIN.saturating_add(dice.range(low, high).saturating_sub(1))
}
