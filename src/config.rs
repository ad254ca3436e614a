use serde::{Deserialize, Serialize};

use crate::types::Level;

const DEFAULT_AI_DELAY_MS: u32 = 400;

/// Settings handed over by the page when a game is created.
///
/// Missing keys fall back to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub level: Level,
    /// Seed for the easy tier's random source. `None` lets the caller pick.
    pub seed: Option<u64>,
    /// How long the page waits before asking for the computer's move.
    pub ai_delay_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level: Level::Hard,
            seed: None,
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_hard_without_seed() {
        let config = GameConfig::default();

        assert_eq!(config.level, Level::Hard);
        assert_eq!(config.seed, None);
        assert_eq!(config.ai_delay_ms, 400);
    }

    #[test]
    fn partial_object_keeps_remaining_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"level":"easy","seed":9}"#).unwrap();

        assert_eq!(config.level, Level::Easy);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.ai_delay_ms, 400);
    }

    #[test]
    fn rejects_unknown_level_name() {
        let parsed = serde_json::from_str::<GameConfig>(r#"{"level":"expert"}"#);

        assert!(parsed.is_err());
    }
}
