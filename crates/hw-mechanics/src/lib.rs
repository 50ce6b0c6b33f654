//! Stat generation and combat decisions for Heldenwerk.
//!
//! Provides a pluggable die source, the five-mode cheat dice, three
//! ability-score generation methods (Hardcore 3d6, Simple point-buy, and
//! 4d6-drop-lowest), the monster combat decision, and a bestiary of
//! randomized monsters. [`Engine`] bundles a die source, the cheat state,
//! and an [`EngineConfig`] for callers that just want to drive a session.

pub mod bestiary;
pub mod cheat;
pub mod combat;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod generation;

pub use cheat::{CheatMode, CheatState};
pub use combat::{CombatChoice, CombatDecision};
pub use config::EngineConfig;
pub use dice::{DicePool, Die, DieSource, RollResult, ScriptedDice};
pub use engine::Engine;
pub use error::{MechError, MechResult};
pub use generation::{GenerationMethod, GenerationSession, finalize, generate};
