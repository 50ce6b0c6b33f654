use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde_json::json;

use hw_core::{Monster, MonsterKind, WrathPolicy};
use hw_mechanics::CombatChoice;

use super::EngineArgs;

pub fn run(
    monster: &str,
    randomize: bool,
    turns: u32,
    hits: &[u32],
    policy: &str,
    json: bool,
    engine_args: &EngineArgs,
) -> Result<(), String> {
    let policy = parse_policy(policy)?;
    let mut engine = engine_args.build()?;
    let mut monster = match parse_monster(monster)? {
        Some(kind) => engine.spawn(kind, randomize),
        None => engine.random_monster(),
    }
    .with_wrath_policy(policy);

    let header = summary(&monster);
    tracing::info!(monster = monster.name(), turns, hits = hits.len(), "encounter started");
    let mut log = Vec::new();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Turn", "Attack", "Heal", "Flee", "Action", "Hit", "Health"]);

    for turn in 1..=turns {
        let decision = engine.monster_turn(&monster);
        let mut note = decision.choice.to_string();
        if decision.choice == CombatChoice::Heal && !monster.character.drink_potion() {
            note.push_str(" (no potions)");
        }

        let hit = hits.get((turn - 1) as usize).copied();
        let report = hit.map(|amount| monster.apply_damage(amount));

        table.add_row(vec![
            turn.to_string(),
            decision.attack_value.to_string(),
            decision.heal_value.to_string(),
            decision.flee_value.to_string(),
            note,
            hit.map_or_else(|| "-".to_string(), |h| h.to_string()),
            monster.character.health.to_string(),
        ]);
        log.push(json!({
            "turn": turn,
            "decision": decision,
            "hit": hit,
            "damage": report,
            "health": monster.character.health,
            "aggression": monster.aggression,
        }));

        if decision.choice == CombatChoice::Flee || !monster.character.is_alive() {
            tracing::debug!(turn, choice = %decision.choice, "encounter ended early");
            break;
        }
    }

    if json {
        let out = json!({ "monster": monster, "turns": log });
        let out = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {} {header}", "Encounter".bold());
    println!("{table}");
    println!();
    let outcome = if !monster.character.is_alive() {
        format!("{} falls.", monster.name()).red().to_string()
    } else if log.len() < turns as usize {
        format!("{} flees!", monster.name()).yellow().to_string()
    } else {
        format!("{} is still standing.", monster.name())
    };
    println!("  {outcome}");
    Ok(())
}

fn summary(monster: &Monster) -> String {
    format!(
        "{} ({}): health {}/{}, aggression {}, awareness {}, fear {}",
        monster.name(),
        monster.kind,
        monster.character.health,
        monster.character.max_health,
        monster.aggression,
        monster.awareness,
        monster.fear
    )
}

/// `None` means pick one of the presets at random.
fn parse_monster(s: &str) -> Result<Option<MonsterKind>, String> {
    match s.trim().to_lowercase().as_str() {
        "generic" => Ok(Some(MonsterKind::Generic)),
        "orc" => Ok(Some(MonsterKind::Orc)),
        "wrath" | "wrathman" | "wrath-man" => Ok(Some(MonsterKind::WrathMan)),
        "random" => Ok(None),
        other => Err(format!(
            "unknown monster '{other}' (expected generic, orc, wrath, random)"
        )),
    }
}

fn parse_policy(s: &str) -> Result<WrathPolicy, String> {
    match s.trim().to_lowercase().as_str() {
        "half" => Ok(WrathPolicy::HalfDamage),
        "full" => Ok(WrathPolicy::FullDamage),
        other => Err(format!("unknown policy '{other}' (expected half, full)")),
    }
}
