//! Core types for Heldenwerk: ability scores, characters, and monsters.
//!
//! This crate holds the data model only. Dice, stat generation, and the
//! combat decision live in `hw-mechanics`; everything here is deterministic
//! and can be constructed or mutated without a random source.

/// The six ability scores and their fixed ordering.
pub mod ability;
/// Player characters and the standard damage/healing rules.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Monsters, their presets, and per-monster damage rules.
pub mod monster;

/// Re-export ability types.
pub use ability::{Ability, AbilityScores, MAX_SCORE, MIN_SCORE};
/// Re-export the character type.
pub use character::Character;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export monster types.
pub use monster::{
    DamageReport, DamageRule, Monster, MonsterKind, WRATH_MAX_HEALTH, WrathPolicy,
};
