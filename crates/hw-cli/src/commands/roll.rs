use colored::Colorize;

use hw_core::{Ability, Character};
use hw_mechanics::{GenerationMethod, GenerationSession};

use super::EngineArgs;

/// Choices supplied up front for the interactive methods.
pub struct Picks<'a> {
    pub highest: Option<&'a str>,
    pub lowest: Option<&'a str>,
    pub assign: &'a [usize],
}

pub fn run(
    method: &str,
    picks: Picks<'_>,
    name: &str,
    max_health: i32,
    json: bool,
    engine_args: &EngineArgs,
) -> Result<(), String> {
    let method = GenerationMethod::parse(method)
        .ok_or_else(|| format!("unknown method '{method}' (expected hardcore, simple, 4d6)"))?;
    let mut character = Character::new(name)
        .with_max_health(max_health)
        .map_err(|e| e.to_string())?;
    let mut engine = engine_args.build()?;
    let mut session = engine.generate(method).map_err(|e| e.to_string())?;

    match method {
        GenerationMethod::Hardcore => {}
        GenerationMethod::Simple => apply_simple_picks(&mut session, &picks)?,
        GenerationMethod::FourD6 => {
            if let (GenerationSession::FourD6(inner), false) = (&session, json) {
                let pool: Vec<String> = inner.raw_pool().iter().map(|v| v.to_string()).collect();
                println!("  {} {}", "Rolled".bold(), pool.join(", "));
            }
            apply_assignment(&mut session, picks.assign)?;
        }
    }

    engine
        .finalize_into(&session, &mut character)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&character).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        println!("  {} {} character", "Finalized".bold(), method);
        super::print_character(&character);
    }
    Ok(())
}

fn apply_simple_picks(session: &mut GenerationSession, picks: &Picks<'_>) -> Result<(), String> {
    let (Some(highest), Some(lowest)) = (picks.highest, picks.lowest) else {
        return Err("simple needs --highest and --lowest".into());
    };
    for pick in [highest, lowest] {
        let ability =
            Ability::parse(pick).ok_or_else(|| format!("unknown ability '{pick}'"))?;
        session
            .select(ability.index())
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn apply_assignment(session: &mut GenerationSession, assign: &[usize]) -> Result<(), String> {
    if assign.is_empty() {
        for i in 0..Ability::ORDER.len() {
            session.select(i).map_err(|e| e.to_string())?;
        }
        return Ok(());
    }
    if assign.len() != Ability::ORDER.len() {
        return Err(format!(
            "--assign needs 6 positions, got {}",
            assign.len()
        ));
    }
    for position in assign {
        let index = position
            .checked_sub(1)
            .ok_or_else(|| "positions start at 1".to_string())?;
        session.select(index).map_err(|e| e.to_string())?;
    }
    Ok(())
}
