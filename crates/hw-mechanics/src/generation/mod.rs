//! Ability score generation methods and the sessions that drive them.
//!
//! [`generate`] starts a session for one of the three methods. Hardcore
//! sessions are complete as soon as they exist; Simple and 4d6 sessions
//! need picks via [`GenerationSession::select`] before [`finalize`] will
//! accept them.

pub mod four_d6;
pub mod hardcore;
pub mod simple;

pub use four_d6::FourD6Session;
pub use hardcore::HardcoreSession;
pub use simple::{SimplePhase, SimpleSession};

use hw_core::AbilityScores;
use serde::{Deserialize, Serialize};

use crate::cheat::CheatState;
use crate::dice::DieSource;
use crate::error::{MechError, MechResult};

/// The three ways to produce a set of ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMethod {
    /// 3d6 in order, rerolled until some score beats 12.
    Hardcore,
    /// One 17, one 9, four 12s.
    Simple,
    /// Six 4d6-drop-lowest values assigned by the caller.
    FourD6,
}

impl GenerationMethod {
    /// Parse a method name: `hardcore`, `simple`, `4d6` / `fourd6`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hardcore" | "3d6" => Some(Self::Hardcore),
            "simple" => Some(Self::Simple),
            "4d6" | "fourd6" | "four_d6" => Some(Self::FourD6),
            _ => None,
        }
    }
}

impl std::fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hardcore => write!(f, "Hardcore"),
            Self::Simple => write!(f, "Simple"),
            Self::FourD6 => write!(f, "4d6"),
        }
    }
}

/// An in-progress generation, one variant per method.
#[derive(Debug, Clone)]
pub enum GenerationSession {
    /// Hardcore: rolled and done.
    Hardcore(HardcoreSession),
    /// Simple: two picks.
    Simple(SimpleSession),
    /// 4d6: six picks from a rolled pool.
    FourD6(FourD6Session),
}

/// Start a session for `method`.
///
/// `hardcore_max_attempts` caps the Hardcore reroll loop; `None` leaves it
/// unbounded. It only fails when that cap is hit.
pub fn generate(
    method: GenerationMethod,
    dice: &mut impl DieSource,
    cheat: &CheatState,
    hardcore_max_attempts: Option<u32>,
) -> MechResult<GenerationSession> {
    let session = match method {
        GenerationMethod::Hardcore => {
            GenerationSession::Hardcore(HardcoreSession::roll(dice, hardcore_max_attempts)?)
        }
        GenerationMethod::Simple => GenerationSession::Simple(SimpleSession::new()),
        GenerationMethod::FourD6 => GenerationSession::FourD6(FourD6Session::roll(dice, cheat)),
    };
    tracing::debug!(%method, values = ?session.current_values(), "generation started");
    Ok(session)
}

/// Commit a complete session into ability scores in stat order.
pub fn finalize(session: &GenerationSession) -> MechResult<AbilityScores> {
    if !session.is_complete() {
        return Err(MechError::IncompleteSession(session.method()));
    }
    let values = session.current_values().map(|v| v.unwrap_or_default());
    let scores = AbilityScores::try_from_array(values)?;
    tracing::info!(method = %session.method(), %scores, "abilities finalized");
    Ok(scores)
}

impl GenerationSession {
    /// Which method this session runs.
    pub fn method(&self) -> GenerationMethod {
        match self {
            Self::Hardcore(_) => GenerationMethod::Hardcore,
            Self::Simple(_) => GenerationMethod::Simple,
            Self::FourD6(_) => GenerationMethod::FourD6,
        }
    }

    /// Make a pick. For Simple, `index` is an ability slot; for 4d6 it is a
    /// raw value index. Hardcore has nothing to pick.
    pub fn select(&mut self, index: usize) -> MechResult<()> {
        match self {
            Self::Hardcore(_) => Err(MechError::InvalidSelection {
                index,
                reason: "Hardcore scores are assigned in order".to_string(),
            }),
            Self::Simple(s) => s.select(index),
            Self::FourD6(s) => s.select(index),
        }
    }

    /// Start over with fresh randomness where the method has any. Simple has
    /// none, so this is the same as [`reset`](Self::reset) there.
    pub fn reroll(&mut self, dice: &mut impl DieSource, cheat: &CheatState) -> MechResult<()> {
        match self {
            Self::Hardcore(s) => s.reroll(dice)?,
            Self::Simple(s) => s.reset(),
            Self::FourD6(s) => s.reroll(dice, cheat),
        }
        Ok(())
    }

    /// Clear picks but keep whatever was rolled. No-op for Hardcore.
    pub fn reset(&mut self) {
        match self {
            Self::Hardcore(_) => {}
            Self::Simple(s) => s.reset(),
            Self::FourD6(s) => s.reset(),
        }
    }

    /// Values in stat order; `None` marks an unfilled slot.
    pub fn current_values(&self) -> [Option<u32>; 6] {
        match self {
            Self::Hardcore(s) => s.values().map(Some),
            Self::Simple(s) => s.current_values(),
            Self::FourD6(s) => s.current_values(),
        }
    }

    /// True when [`finalize`] will succeed.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Hardcore(_) => true,
            Self::Simple(s) => s.is_complete(),
            Self::FourD6(s) => s.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_method_names() {
        assert_eq!(GenerationMethod::parse("Hardcore"), Some(GenerationMethod::Hardcore));
        assert_eq!(GenerationMethod::parse("simple"), Some(GenerationMethod::Simple));
        assert_eq!(GenerationMethod::parse("4d6"), Some(GenerationMethod::FourD6));
        assert_eq!(GenerationMethod::parse("point-buy"), None);
    }

    #[test]
    fn hardcore_is_immediately_complete() {
        let mut rng = StdRng::seed_from_u64(3);
        let session =
            generate(GenerationMethod::Hardcore, &mut rng, &CheatState::new(), None).unwrap();
        assert!(session.is_complete());
        assert!(session.current_values().iter().all(Option::is_some));
        assert!(finalize(&session).is_ok());
    }

    #[test]
    fn hardcore_rejects_selection() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session =
            generate(GenerationMethod::Hardcore, &mut rng, &CheatState::new(), None).unwrap();
        let before = session.current_values();
        assert!(matches!(
            session.select(0),
            Err(MechError::InvalidSelection { index: 0, .. })
        ));
        session.reset();
        assert_eq!(session.current_values(), before);
    }

    #[test]
    fn simple_finalize_needs_both_picks() {
        let mut dice = ScriptedDice::default();
        let mut session =
            generate(GenerationMethod::Simple, &mut dice, &CheatState::new(), None).unwrap();
        assert!(matches!(
            finalize(&session),
            Err(MechError::IncompleteSession(GenerationMethod::Simple))
        ));
        session.select(5).unwrap();
        assert!(finalize(&session).is_err());
        session.select(0).unwrap();
        let scores = finalize(&session).unwrap();
        assert_eq!(scores.charisma, 17);
        assert_eq!(scores.strength, 9);
        assert_eq!(scores.wisdom, 12);
        assert_eq!(dice.drawn(), 0);
    }

    #[test]
    fn four_d6_finalize_binds_in_slot_order() {
        let mut dice = ScriptedDice::new([
            6, 6, 6, 1, // 18
            5, 5, 5, 1, // 15
            4, 4, 4, 1, // 12
            3, 3, 3, 1, // 9
            2, 2, 2, 1, // 6
            6, 5, 4, 1, // 15
        ]);
        let mut session =
            generate(GenerationMethod::FourD6, &mut dice, &CheatState::new(), None).unwrap();
        assert_eq!(session.current_values(), [None; 6]);
        for i in [4, 3, 2, 1, 0] {
            session.select(i).unwrap();
        }
        assert!(matches!(
            finalize(&session),
            Err(MechError::IncompleteSession(GenerationMethod::FourD6))
        ));
        session.select(5).unwrap();
        let scores = finalize(&session).unwrap();
        assert_eq!(scores.to_array(), [6, 9, 12, 15, 18, 15]);
    }

    #[test]
    fn four_d6_reset_vs_reroll() {
        let mut rng = StdRng::seed_from_u64(11);
        let cheat = CheatState::new();
        let mut session = generate(GenerationMethod::FourD6, &mut rng, &cheat, None).unwrap();
        let GenerationSession::FourD6(inner) = &session else {
            panic!("expected a 4d6 session");
        };
        let pool = inner.raw_pool();

        session.select(0).unwrap();
        session.select(1).unwrap();
        session.reset();
        assert_eq!(session.current_values(), [None; 6]);
        let GenerationSession::FourD6(inner) = &session else {
            panic!("expected a 4d6 session");
        };
        assert_eq!(inner.raw_pool(), pool);

        let mut sixes = ScriptedDice::new([6]);
        session.select(2).unwrap();
        session.reroll(&mut sixes, &cheat).unwrap();
        assert_eq!(session.current_values(), [None; 6]);
        let GenerationSession::FourD6(inner) = &session else {
            panic!("expected a 4d6 session");
        };
        assert_eq!(inner.raw_pool(), [18; 6]);
    }

    #[test]
    fn simple_reroll_is_reset() {
        let mut dice = ScriptedDice::default();
        let mut session =
            generate(GenerationMethod::Simple, &mut dice, &CheatState::new(), None).unwrap();
        session.select(0).unwrap();
        session.reroll(&mut dice, &CheatState::new()).unwrap();
        assert_eq!(session.current_values(), [Some(12); 6]);
    }

    #[test]
    fn zero_cap_from_generate_behaves_like_one() {
        let mut dice = ScriptedDice::new([1]);
        let err = generate(GenerationMethod::Hardcore, &mut dice, &CheatState::new(), Some(0))
            .unwrap_err();
        assert!(matches!(err, MechError::RerollLimit(1)));
        assert_eq!(dice.drawn(), 18);
    }

    #[test]
    fn hardcore_cap_surfaces_from_generate() {
        // Every die a 1: every block is 3s across the board.
        let mut dice = ScriptedDice::new([1]);
        let err = generate(GenerationMethod::Hardcore, &mut dice, &CheatState::new(), Some(4))
            .unwrap_err();
        assert!(matches!(err, MechError::RerollLimit(4)));
    }
}
