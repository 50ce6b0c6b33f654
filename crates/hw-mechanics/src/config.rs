//! Configuration for an [`Engine`](crate::Engine).

use crate::cheat::CheatMode;

/// Engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Cheat mode in effect when the engine starts.
    pub cheat: CheatMode,
    /// Cap on rejected Hardcore sets. `None` rerolls until one is valid.
    pub hardcore_max_attempts: Option<u32>,
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting cheat mode.
    pub fn with_cheat(mut self, cheat: CheatMode) -> Self {
        self.cheat = cheat;
        self
    }

    /// Cap the Hardcore reroll loop (at least one attempt).
    pub fn with_hardcore_max_attempts(mut self, attempts: u32) -> Self {
        self.hardcore_max_attempts = Some(attempts.max(1));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.cheat, CheatMode::Off);
        assert_eq!(cfg.hardcore_max_attempts, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_seed(123)
            .with_cheat(CheatMode::FlipLow)
            .with_hardcore_max_attempts(10);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.cheat, CheatMode::FlipLow);
        assert_eq!(cfg.hardcore_max_attempts, Some(10));
    }

    #[test]
    fn attempt_cap_clamped() {
        let cfg = EngineConfig::default().with_hardcore_max_attempts(0);
        assert_eq!(cfg.hardcore_max_attempts, Some(1));
    }
}
