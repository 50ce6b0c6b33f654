use std::io::{self, BufRead, Write};

use colored::Colorize;

use hw_core::{Ability, Character};
use hw_mechanics::{Engine, GenerationMethod, GenerationSession};

use super::EngineArgs;

const HELP: &str = "\
Commands:
  method <hardcore|simple|4d6>  start generating with a method
  pick <n|ability>              simple: pick a slot; 4d6: pick raw value n (1-6)
  reroll                        roll again (simple: same as reset)
  reset                         clear picks, keep rolled values
  cheat                         cycle the cheat dice mode
  show                          show the current values
  done                          finalize the character
  quit                          leave without saving";

pub fn run(name: &str, engine_args: &EngineArgs) -> Result<(), String> {
    let engine = engine_args.build()?;
    let mut creator = Creator::new(engine, name);

    println!("  {} Character Creator", "Starting".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match creator.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if creator.is_finished() {
                    if let Some(character) = creator.character() {
                        super::print_character(character);
                    }
                    break;
                }
            }
            Err(e) => println!("{}\n", e.yellow()),
        }
    }

    Ok(())
}

/// Line-driven front end over an [`Engine`].
pub struct Creator {
    engine: Engine,
    name: String,
    session: Option<GenerationSession>,
    character: Option<Character>,
    finished: bool,
}

impl Creator {
    pub fn new(engine: Engine, name: &str) -> Self {
        Self {
            engine,
            name: name.to_string(),
            session: None,
            character: None,
            finished: false,
        }
    }

    /// True after `done` succeeded or `quit` was entered.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The finalized character, once `done` has succeeded.
    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    /// Handle one line of input.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let parts: Vec<&str> = input.trim().splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "method" | "m" => self.do_method(rest),
            "pick" | "p" => self.do_pick(rest),
            "reroll" => self.do_reroll(),
            "reset" => self.do_reset(),
            "cheat" => Ok(self.engine.cheat_toggle()),
            "show" => self.status(),
            "done" => self.do_done(),
            "help" | "?" => Ok(HELP.to_string()),
            "quit" | "q" => {
                self.finished = true;
                Ok("Goodbye!".to_string())
            }
            other => Err(format!("unknown command '{other}' (try 'help')")),
        }
    }

    fn session_mut(&mut self) -> Result<&mut GenerationSession, String> {
        self.session
            .as_mut()
            .ok_or_else(|| "pick a method first: method <hardcore|simple|4d6>".to_string())
    }

    fn do_method(&mut self, rest: &str) -> Result<String, String> {
        let method = GenerationMethod::parse(rest)
            .ok_or_else(|| format!("unknown method '{rest}' (expected hardcore, simple, 4d6)"))?;
        self.session = Some(self.engine.generate(method).map_err(|e| e.to_string())?);
        self.status()
    }

    fn do_pick(&mut self, rest: &str) -> Result<String, String> {
        let session = self.session_mut()?;
        let index = match session {
            GenerationSession::Simple(_) => match Ability::parse(rest) {
                Some(ability) => ability.index(),
                None => super::parse_position(rest)?,
            },
            _ => super::parse_position(rest)?,
        };
        session.select(index).map_err(|e| e.to_string())?;
        self.status()
    }

    fn do_reroll(&mut self) -> Result<String, String> {
        let mut session = self
            .session
            .take()
            .ok_or_else(|| "nothing to reroll yet".to_string())?;
        let result = self.engine.reroll(&mut session);
        self.session = Some(session);
        result.map_err(|e| e.to_string())?;
        self.status()
    }

    fn do_reset(&mut self) -> Result<String, String> {
        self.session_mut()?.reset();
        self.status()
    }

    fn do_done(&mut self) -> Result<String, String> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| "nothing to finalize yet".to_string())?;
        let mut character = Character::new(self.name.as_str());
        self.engine
            .finalize_into(session, &mut character)
            .map_err(|e| e.to_string())?;
        tracing::info!(name = %self.name, method = %session.method(), "character saved");
        self.character = Some(character);
        self.finished = true;
        Ok(format!("{} {}", "Saved".bold(), self.name))
    }

    fn status(&self) -> Result<String, String> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| "no method chosen yet".to_string())?;
        let mut out = format!("  [{}] {}", session.method(), super::format_slots(session));
        match session {
            GenerationSession::Hardcore(s) => {
                out.push_str(&format!("\n  rolled in {} attempt(s)", s.attempts()));
            }
            GenerationSession::Simple(s) => {
                out.push_str(&format!("\n  {}", s.phase().prompt()));
            }
            GenerationSession::FourD6(s) => {
                let pool: Vec<String> = s
                    .raw_pool()
                    .iter()
                    .zip(s.available())
                    .enumerate()
                    .map(|(i, (v, open))| {
                        if open {
                            format!("[{}] {v}", i + 1)
                        } else {
                            format!("[{}] {v} (used)", i + 1)
                        }
                    })
                    .collect();
                out.push_str(&format!("\n  pool: {}", pool.join("  ")));
                match s.next_slot() {
                    Some(ability) => out.push_str(&format!("\n  Pick a value for {ability}")),
                    None => out.push_str("\n  Done!"),
                }
            }
        }
        if session.is_complete() {
            out.push_str("\n  Type 'done' to keep these scores.");
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hw_mechanics::EngineConfig;

    fn creator() -> Creator {
        Creator::new(Engine::new(EngineConfig::default().with_seed(42)), "Tester")
    }

    #[test]
    fn needs_method_first() {
        let mut c = creator();
        assert!(c.process("pick 1").is_err());
        assert!(c.process("done").is_err());
        assert!(c.process("reroll").is_err());
    }

    #[test]
    fn simple_flow_by_ability_name() {
        let mut c = creator();
        let out = c.process("method simple").unwrap();
        assert!(out.contains("raise to 17"));
        c.process("pick str").unwrap();
        assert!(c.process("pick str").is_err());
        let out = c.process("pick wis").unwrap();
        assert!(out.contains("STR 17"));
        assert!(out.contains("WIS  9"));
        c.process("done").unwrap();
        assert!(c.is_finished());
        let hero = c.character().unwrap();
        assert_eq!(hero.name, "Tester");
        assert_eq!(hero.abilities.strength, 17);
        assert_eq!(hero.abilities.wisdom, 9);
    }

    #[test]
    fn four_d6_flow() {
        let mut c = creator();
        c.process("method 4d6").unwrap();
        assert!(c.process("done").is_err());
        for n in 1..=6 {
            c.process(&format!("pick {n}")).unwrap();
        }
        assert!(c.process("pick 1").is_err());
        c.process("done").unwrap();
        let hero = c.character().unwrap();
        assert!(hero.abilities.iter().all(|(_, v)| (3..=18).contains(&v)));
    }

    #[test]
    fn reset_reopens_pool() {
        let mut c = creator();
        c.process("method 4d6").unwrap();
        c.process("pick 3").unwrap();
        let out = c.process("reset").unwrap();
        assert!(!out.contains("(used)"));
        assert!(out.contains("Pick a value for Strength"));
    }

    #[test]
    fn cheat_cycles() {
        let mut c = creator();
        assert_eq!(
            c.process("cheat").unwrap(),
            "Cheat 1 enabled! All dice are rerolled once"
        );
    }

    #[test]
    fn hardcore_done_immediately() {
        let mut c = creator();
        let out = c.process("method hardcore").unwrap();
        assert!(out.contains("attempt"));
        c.process("done").unwrap();
        assert!(c.character().is_some());
    }

    #[test]
    fn quit_finishes_without_character() {
        let mut c = creator();
        c.process("quit").unwrap();
        assert!(c.is_finished());
        assert!(c.character().is_none());
    }

    #[test]
    fn unknown_command() {
        assert!(creator().process("dance").is_err());
    }
}
