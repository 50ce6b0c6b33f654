//! A die source, cheat state, and configuration bundled for callers.

use hw_core::{Character, Monster, MonsterKind};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bestiary;
use crate::cheat::CheatState;
use crate::combat::{self, CombatDecision};
use crate::config::EngineConfig;
use crate::dice::DieSource;
use crate::error::MechResult;
use crate::generation::{self, GenerationMethod, GenerationSession};

/// Everything a caller needs to generate characters and run monster turns.
#[derive(Debug)]
pub struct Engine<D: DieSource = StdRng> {
    dice: D,
    cheat: CheatState,
    config: EngineConfig,
}

impl Engine<StdRng> {
    /// Build an engine backed by `StdRng`, seeded from the config or the OS.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_dice(rng, config)
    }
}

impl<D: DieSource> Engine<D> {
    /// Build an engine over any die source.
    pub fn with_dice(dice: D, config: EngineConfig) -> Self {
        Self {
            dice,
            cheat: CheatState::with_mode(config.cheat),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The cheat state.
    pub fn cheat(&self) -> &CheatState {
        &self.cheat
    }

    /// Advance the cheat mode and return its announcement.
    pub fn cheat_toggle(&mut self) -> String {
        self.cheat.toggle()
    }

    /// Start a generation session.
    pub fn generate(&mut self, method: GenerationMethod) -> MechResult<GenerationSession> {
        generation::generate(
            method,
            &mut self.dice,
            &self.cheat,
            self.config.hardcore_max_attempts,
        )
    }

    /// Reroll a session with this engine's dice and current cheat mode.
    pub fn reroll(&mut self, session: &mut GenerationSession) -> MechResult<()> {
        session.reroll(&mut self.dice, &self.cheat)
    }

    /// Finalize a session and write the scores into `character`.
    pub fn finalize_into(
        &self,
        session: &GenerationSession,
        character: &mut Character,
    ) -> MechResult<()> {
        let scores = generation::finalize(session)?;
        character.apply_abilities(scores);
        Ok(())
    }

    /// Run one combat decision for `monster`.
    pub fn monster_turn(&mut self, monster: &Monster) -> CombatDecision {
        combat::monster_turn(monster, &mut self.dice)
    }

    /// Build a monster of `kind`, optionally with rolled values.
    pub fn spawn(&mut self, kind: MonsterKind, randomized: bool) -> Monster {
        bestiary::spawn(kind, randomized, &mut self.dice)
    }

    /// Pick one of the stock monsters at random.
    pub fn random_monster(&mut self) -> Monster {
        bestiary::random_monster(&mut self.dice)
    }
}
