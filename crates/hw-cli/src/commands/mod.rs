pub mod cheats;
pub mod create;
pub mod encounter;
pub mod roll;

use clap::Args;
use comfy_table::{ContentArrangement, Table};

use hw_core::{Ability, Character};
use hw_mechanics::{CheatMode, Engine, EngineConfig, GenerationSession};

/// Engine settings shared by every command that rolls dice.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// RNG seed for reproducible rolls
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Starting cheat mode (0-4, see `hw cheats`)
    #[arg(short, long, default_value = "0")]
    pub cheat: u8,

    /// Give up on Hardcore after this many rejected sets
    #[arg(long)]
    pub max_attempts: Option<u32>,
}

impl EngineArgs {
    /// Build an engine from the flags.
    pub fn build(&self) -> Result<Engine, String> {
        let cheat = CheatMode::from_index(self.cheat)
            .ok_or_else(|| format!("cheat mode must be 0-4, got {}", self.cheat))?;
        let mut config = EngineConfig::default().with_cheat(cheat);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(attempts) = self.max_attempts {
            config = config.with_hardcore_max_attempts(attempts);
        }
        Ok(Engine::new(config))
    }
}

/// A two-column ability table plus the character's vitals.
fn character_table(character: &Character) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ability", "Score"]);
    for (ability, score) in character.abilities.iter() {
        table.add_row(vec![ability.name().to_string(), score.to_string()]);
    }
    table
}

/// Print a finished character sheet.
pub fn print_character(character: &Character) {
    println!("  {}", character.name);
    println!("{}", character_table(character));
    println!(
        "  Health {}/{} | Speed {} | Stamina {} | Potions {}",
        character.health,
        character.max_health,
        character.speed,
        character.stamina,
        character.number_of_potions
    );
}

/// One line per slot: `STR 17`, or `STR --` while unfilled.
pub fn format_slots(session: &GenerationSession) -> String {
    Ability::ORDER
        .into_iter()
        .zip(session.current_values())
        .map(|(ability, value)| match value {
            Some(v) => format!("{} {v:>2}", ability.abbrev()),
            None => format!("{} --", ability.abbrev()),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Parse a 1-based position typed by a person into a 0-based index.
pub fn parse_position(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    n.checked_sub(1)
        .ok_or_else(|| "positions start at 1".to_string())
}
