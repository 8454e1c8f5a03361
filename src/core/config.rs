//! Engine configuration and difficulty levels.
//!
//! - `Difficulty`: The fixed set of board sizes a host can offer
//! - `LevelConfig`: Grid shape and pair count for a difficulty
//! - `EngineConfig`: Tunable delays, tick interval and shuffle seed

use serde::{Deserialize, Serialize};

/// Board difficulty. Selected by the host, read at prepare time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 6 pairs on a 4×3 grid.
    #[default]
    Easy,
    /// 12 pairs on a 6×4 grid.
    Hard,
}

impl Difficulty {
    /// Every difficulty, in display order.
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    /// Grid shape and pair count for this difficulty.
    #[must_use]
    pub const fn level(self) -> LevelConfig {
        match self {
            Difficulty::Easy => LevelConfig::new(4, 3, 6),
            Difficulty::Hard => LevelConfig::new(6, 4, 12),
        }
    }

    /// Number of pairs dealt for this difficulty.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.level().pairs
    }

    /// Key under which the best score for this difficulty is persisted.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Difficulty::Easy => "mg_best_easy",
            Difficulty::Hard => "mg_best_hard",
        }
    }

    /// Lowercase name, as used by the host's selector.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            other => Err(UnknownDifficulty(other.to_string())),
        }
    }
}

/// Returned when parsing a difficulty name fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty: {0}")]
pub struct UnknownDifficulty(pub String);

/// Grid shape for a difficulty.
///
/// `columns * rows == 2 * pairs` for every built-in level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Grid columns.
    pub columns: usize,
    /// Grid rows.
    pub rows: usize,
    /// Pairs dealt.
    pub pairs: usize,
}

impl LevelConfig {
    /// Create a level configuration.
    #[must_use]
    pub const fn new(columns: usize, rows: usize, pairs: usize) -> Self {
        Self { columns, rows, pairs }
    }

    /// Cards on the board.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.pairs * 2
    }
}

/// Engine tuning parameters.
///
/// The two resolution delays only need to be long enough for a person to
/// see the second card; their values don't affect game rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Delay before a matched pair is locked in (milliseconds).
    pub match_delay_ms: u64,

    /// Delay before a mismatched pair is turned back over (milliseconds).
    /// Longer than `match_delay_ms`.
    pub mismatch_delay_ms: u64,

    /// Period of the elapsed-time tick while a game runs (milliseconds).
    pub tick_interval_ms: u64,

    /// Shuffle seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_delay_ms: 350,
            mismatch_delay_ms: 850,
            tick_interval_ms: 250,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the match resolution delay.
    #[must_use]
    pub fn with_match_delay(mut self, ms: u64) -> Self {
        self.match_delay_ms = ms;
        self
    }

    /// Set the mismatch resolution delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, ms: u64) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }

    /// Set the elapsed-time tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        let easy = Difficulty::Easy.level();
        assert_eq!((easy.columns, easy.rows, easy.pairs), (4, 3, 6));
        assert_eq!(easy.card_count(), easy.columns * easy.rows);

        let hard = Difficulty::Hard.level();
        assert_eq!((hard.columns, hard.rows, hard.pairs), (6, 4, 12));
        assert_eq!(hard.card_count(), hard.columns * hard.rows);
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(Difficulty::Easy.storage_key(), "mg_best_easy");
        assert_eq!(Difficulty::Hard.storage_key(), "mg_best_hard");
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("medium".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Hard.to_string(), "hard");
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.match_delay_ms, 350);
        assert_eq!(config.mismatch_delay_ms, 850);
        assert_eq!(config.tick_interval_ms, 250);
        assert!(config.match_delay_ms < config.mismatch_delay_ms);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_match_delay(100)
            .with_mismatch_delay(200)
            .with_tick_interval(50)
            .with_seed(9);

        assert_eq!(config.match_delay_ms, 100);
        assert_eq!(config.mismatch_delay_ms, 200);
        assert_eq!(config.tick_interval_ms, 50);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        let d: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
    }
}
