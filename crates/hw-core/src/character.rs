use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::ability::AbilityScores;
use crate::error::{CoreError, CoreResult};

/// Health restored by drinking one potion.
pub const POTION_HEALING: u32 = 5;

/// A player character or the stat block underneath a monster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Maximum health (at least 1).
    pub max_health: i32,
    /// Current health. May drop below zero; never rises above `max_health`.
    pub health: i32,
    /// Movement speed.
    pub speed: i32,
    /// Stamina pool.
    pub stamina: i32,
    /// The six ability scores.
    pub abilities: AbilityScores,
    /// Healing potions carried.
    pub number_of_potions: u32,
    /// Item references, in pickup order.
    pub inventory: Vec<String>,
}

impl Character {
    /// Create a character with default stats: 10 health, speed and stamina
    /// 25, all abilities 10, and two potions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_health: 10,
            health: 10,
            speed: 25,
            stamina: 25,
            abilities: AbilityScores::default(),
            number_of_potions: 2,
            inventory: Vec::new(),
        }
    }

    /// Set maximum health and refill current health to match. Rejects
    /// values below 1.
    pub fn with_max_health(self, max_health: i32) -> CoreResult<Self> {
        u32::try_from(max_health)
            .ok()
            .and_then(NonZeroU32::new)
            .map(|pool| self.with_health_pool(pool))
            .ok_or(CoreError::InvalidMaxHealth(max_health))
    }

    /// Set a maximum health already known to be positive, and refill.
    pub fn with_health_pool(mut self, max_health: NonZeroU32) -> Self {
        self.set_health_pool(max_health);
        self
    }

    /// In-place form of [`with_health_pool`](Self::with_health_pool).
    /// Values past `i32::MAX` are clamped.
    pub fn set_health_pool(&mut self, max_health: NonZeroU32) {
        self.max_health = i32::try_from(max_health.get()).unwrap_or(i32::MAX);
        self.health = self.max_health;
    }

    /// Set speed.
    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    /// Set stamina.
    pub fn with_stamina(mut self, stamina: i32) -> Self {
        self.stamina = stamina;
        self
    }

    /// Set all six ability scores.
    pub fn with_abilities(mut self, abilities: AbilityScores) -> Self {
        self.abilities = abilities;
        self
    }

    /// Set the potion count.
    pub fn with_potions(mut self, count: u32) -> Self {
        self.number_of_potions = count;
        self
    }

    /// Replace the ability scores with a finalized set.
    pub fn apply_abilities(&mut self, abilities: AbilityScores) {
        self.abilities = abilities;
    }

    /// Standard damage rule: health drops by the full amount.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub_unsigned(amount);
    }

    /// Restore health, capped at `max_health`.
    pub fn heal(&mut self, amount: u32) {
        self.health = self
            .health
            .saturating_add_unsigned(amount)
            .min(self.max_health);
    }

    /// Drink a potion if one is left. Returns false when out of potions.
    pub fn drink_potion(&mut self) -> bool {
        if self.number_of_potions == 0 {
            return false;
        }
        self.number_of_potions -= 1;
        self.heal(POTION_HEALING);
        true
    }

    /// True while health is above zero.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new("Adventurer")
    }
}
