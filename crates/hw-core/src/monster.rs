use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::ability::AbilityScores;
use crate::character::Character;

/// Max health of the stock WrathMan.
pub const WRATH_MAX_HEALTH: NonZeroU32 = match NonZeroU32::new(20) {
    Some(health) => health,
    None => panic!("WrathMan health must be positive"),
};

/// Which preset a monster was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterKind {
    /// A plain monster with balanced tendencies.
    Generic,
    /// Aggressive, careless, and rarely afraid.
    Orc,
    /// Fearless; turns half of every hit into strength.
    WrathMan,
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "generic"),
            Self::Orc => write!(f, "orc"),
            Self::WrathMan => write!(f, "wrath man"),
        }
    }
}

/// How much aggression a wrathful monster gains per hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrathPolicy {
    /// Aggression rises by half the damage (integer division).
    #[default]
    HalfDamage,
    /// Aggression rises by the full damage.
    FullDamage,
}

/// The rule a monster uses to absorb damage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageRule {
    /// Health drops by the full amount.
    #[default]
    Standard,
    /// Health drops by half, strength and aggression rise, awareness
    /// rises by a quarter.
    Wrathful(WrathPolicy),
}

/// What a single hit did to a monster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Health removed.
    pub health_lost: u32,
    /// Strength added.
    pub strength_gained: u32,
    /// Aggression added.
    pub aggression_gained: u32,
    /// Awareness added.
    pub awareness_gained: u32,
}

/// A non-player combatant: a character plus combat tendencies.
///
/// `aggression`, `awareness`, and `fear` bias the combat decision toward
/// attacking, healing, and fleeing respectively. Typical values fall in
/// 0..=100 but no upper bound is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// The underlying stat block.
    pub character: Character,
    /// Which preset this monster came from.
    pub kind: MonsterKind,
    /// Tendency to attack.
    pub aggression: u32,
    /// Tendency to heal.
    pub awareness: u32,
    /// Tendency to flee.
    pub fear: u32,
    /// How incoming damage is absorbed.
    pub damage_rule: DamageRule,
}

impl Monster {
    /// Wrap a character as a generic monster with balanced tendencies (50/50/50).
    pub fn new(character: Character) -> Self {
        Self {
            character,
            kind: MonsterKind::Generic,
            aggression: 50,
            awareness: 50,
            fear: 50,
            damage_rule: DamageRule::Standard,
        }
    }

    /// The stock "Generic Foe".
    pub fn generic() -> Self {
        Self::new(Character::new("Generic Foe"))
    }

    /// The stock Orc: weak stats, high aggression, low awareness and fear.
    pub fn orc() -> Self {
        let abilities = AbilityScores {
            strength: 8,
            intelligence: 8,
            dexterity: 8,
            ..AbilityScores::default()
        };
        let character = Character::new("Dorque da Orc")
            .with_speed(25)
            .with_stamina(25)
            .with_abilities(abilities);
        Self {
            kind: MonsterKind::Orc,
            ..Self::new(character)
        }
        .with_biases(80, 30, 20)
    }

    /// The stock WrathMan: 20 health, no fear, wrathful damage intake
    /// with the [`WrathPolicy::HalfDamage`] aggression rule.
    pub fn wrath_man() -> Self {
        let character = Character::new("Wrath").with_health_pool(WRATH_MAX_HEALTH);
        Self {
            kind: MonsterKind::WrathMan,
            fear: 0,
            damage_rule: DamageRule::Wrathful(WrathPolicy::default()),
            ..Self::new(character)
        }
    }

    /// Override aggression, awareness, and fear.
    pub fn with_biases(mut self, aggression: u32, awareness: u32, fear: u32) -> Self {
        self.aggression = aggression;
        self.awareness = awareness;
        self.fear = fear;
        self
    }

    /// Pick the aggression rule for a wrathful monster. Has no effect on
    /// monsters using the standard damage rule.
    pub fn with_wrath_policy(mut self, policy: WrathPolicy) -> Self {
        if let DamageRule::Wrathful(_) = self.damage_rule {
            self.damage_rule = DamageRule::Wrathful(policy);
        }
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.character.name
    }

    /// Absorb a hit through this monster's damage rule.
    pub fn apply_damage(&mut self, amount: u32) -> DamageReport {
        match self.damage_rule {
            DamageRule::Standard => {
                self.character.take_damage(amount);
                DamageReport {
                    health_lost: amount,
                    ..DamageReport::default()
                }
            }
            DamageRule::Wrathful(policy) => {
                let half = amount / 2;
                let aggression_gained = match policy {
                    WrathPolicy::HalfDamage => half,
                    WrathPolicy::FullDamage => amount,
                };
                let report = DamageReport {
                    health_lost: half,
                    strength_gained: half,
                    aggression_gained,
                    awareness_gained: amount / 4,
                };
                self.character.take_damage(report.health_lost);
                let abilities = &mut self.character.abilities;
                abilities.strength = abilities.strength.saturating_add(report.strength_gained);
                self.aggression = self.aggression.saturating_add(report.aggression_gained);
                self.awareness = self.awareness.saturating_add(report.awareness_gained);
                tracing::info!(
                    monster = %self.character.name,
                    amount,
                    strength = self.character.abilities.strength,
                    aggression = self.aggression,
                    "wrath absorbed damage"
                );
                report
            }
        }
    }
}
