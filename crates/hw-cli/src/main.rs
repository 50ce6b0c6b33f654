//! CLI frontend for the Heldenwerk character creator.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "hw",
    about = "Heldenwerk: roll ability scores and pit them against monsters",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr (overridden by HW_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ability scores in one shot
    Roll {
        /// Generation method: hardcore, simple, 4d6
        method: String,

        /// Simple: ability raised to 17 (e.g. str, wisdom)
        #[arg(long)]
        highest: Option<String>,

        /// Simple: ability lowered to 9
        #[arg(long)]
        lowest: Option<String>,

        /// 4d6: raw value positions (1-6) to assign to STR, DEX, CON, INT,
        /// WIS, CHA in turn (default: roll order)
        #[arg(long, value_delimiter = ',')]
        assign: Vec<usize>,

        /// Character name
        #[arg(short, long, default_value = "Adventurer")]
        name: String,

        /// Maximum health of the finished character (at least 1)
        #[arg(long, default_value = "10", allow_negative_numbers = true)]
        max_health: i32,

        /// Print the finished character as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        engine: commands::EngineArgs,
    },

    /// Build a character interactively
    Create {
        /// Character name
        #[arg(short, long, default_value = "Adventurer")]
        name: String,

        #[command(flatten)]
        engine: commands::EngineArgs,
    },

    /// Run monster combat decisions for a few turns
    Encounter {
        /// Monster: generic, orc, wrath, random
        #[arg(short, long, default_value = "random")]
        monster: String,

        /// Roll the monster's values instead of using the preset
        #[arg(short, long)]
        randomize: bool,

        /// Number of turns to run
        #[arg(short, long, default_value = "5")]
        turns: u32,

        /// Damage dealt to the monster after each turn, in order
        #[arg(long = "hit")]
        hits: Vec<u32>,

        /// WrathMan aggression gain per hit: half, full
        #[arg(long, default_value = "half")]
        policy: String,

        /// Print the encounter log as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        engine: commands::EngineArgs,
    },

    /// List the cheat dice modes
    Cheats,
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("HW_LOG")
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            method,
            highest,
            lowest,
            assign,
            name,
            max_health,
            json,
            engine,
        } => commands::roll::run(
            &method,
            commands::roll::Picks {
                highest: highest.as_deref(),
                lowest: lowest.as_deref(),
                assign: &assign,
            },
            &name,
            max_health,
            json,
            &engine,
        ),
        Commands::Create { name, engine } => commands::create::run(&name, &engine),
        Commands::Encounter {
            monster,
            randomize,
            turns,
            hits,
            policy,
            json,
            engine,
        } => commands::encounter::run(
            &monster, randomize, turns, &hits, &policy, json, &engine,
        ),
        Commands::Cheats => commands::cheats::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
