use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Lowest value a finalized ability score may hold.
pub const MIN_SCORE: u32 = 3;
/// Highest value a finalized ability score may hold.
pub const MAX_SCORE: u32 = 18;

/// One of the six classic ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// Physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Endurance and toughness.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and insight.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl Ability {
    /// Standard stat block order: str, dex, con, int, wis, cha.
    pub const ORDER: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Position of this ability in [`Ability::ORDER`].
    pub fn index(self) -> usize {
        match self {
            Self::Strength => 0,
            Self::Dexterity => 1,
            Self::Constitution => 2,
            Self::Intelligence => 3,
            Self::Wisdom => 4,
            Self::Charisma => 5,
        }
    }

    /// Full display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Three-letter abbreviation (STR, DEX, ...).
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Parse an ability from its full name or abbreviation, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ORDER
            .into_iter()
            .find(|a| a.name().to_lowercase() == s || a.abbrev().to_lowercase() == s)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A full set of six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Strength score.
    pub strength: u32,
    /// Dexterity score.
    pub dexterity: u32,
    /// Constitution score.
    pub constitution: u32,
    /// Intelligence score.
    pub intelligence: u32,
    /// Wisdom score.
    pub wisdom: u32,
    /// Charisma score.
    pub charisma: u32,
}

impl AbilityScores {
    /// Every ability set to the same value.
    pub fn uniform(value: u32) -> Self {
        Self::from_array([value; 6])
    }

    /// Build from six values in [`Ability::ORDER`] without range checks.
    pub fn from_array(values: [u32; 6]) -> Self {
        let [strength, dexterity, constitution, intelligence, wisdom, charisma] = values;
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    /// Build from six values in [`Ability::ORDER`], rejecting any score
    /// outside [`MIN_SCORE`]..=[`MAX_SCORE`].
    pub fn try_from_array(values: [u32; 6]) -> CoreResult<Self> {
        for (ability, value) in Ability::ORDER.into_iter().zip(values) {
            if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(CoreError::ScoreOutOfRange { ability, value });
            }
        }
        Ok(Self::from_array(values))
    }

    /// The six values in [`Ability::ORDER`].
    pub fn to_array(self) -> [u32; 6] {
        [
            self.strength,
            self.dexterity,
            self.constitution,
            self.intelligence,
            self.wisdom,
            self.charisma,
        ]
    }

    /// Read a single score.
    pub fn get(&self, ability: Ability) -> u32 {
        self.to_array()[ability.index()]
    }

    /// Overwrite a single score.
    pub fn set(&mut self, ability: Ability, value: u32) {
        let slot = match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        };
        *slot = value;
    }

    /// Iterate `(ability, score)` pairs in stat block order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, u32)> {
        Ability::ORDER.into_iter().zip(self.to_array())
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::uniform(10)
    }
}

impl fmt::Display for AbilityScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(a, v)| format!("{} {v}", a.abbrev()))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
