//! Game configuration types.
//!
//! - `GameMode`: Normal, timed, or hard play
//! - `ScoreTable`: points per move kind and achievement thresholds
//! - `RecyclePolicy`: how the waste becomes the stock again
//! - `RulesConfig`: everything the rules engine needs, with builders

use std::fmt;

use serde::{Deserialize, Serialize};

/// Time limit used when a timed game does not name one.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 600;

/// Time limits offered when starting a timed game: 5, 10 and 15 minutes.
pub const TIME_LIMIT_PRESETS: [u64; 3] = [300, 600, 900];

/// Play mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Normal,
    /// The game is lost once `limit_secs` have elapsed.
    Timed { limit_secs: u64 },
    Hard,
}

impl GameMode {
    /// Timed mode with the default limit.
    #[must_use]
    pub const fn timed() -> Self {
        GameMode::Timed {
            limit_secs: DEFAULT_TIME_LIMIT_SECS,
        }
    }

    /// Time limit in seconds, for timed games.
    #[must_use]
    pub const fn time_limit_secs(self) -> Option<u64> {
        match self {
            GameMode::Timed { limit_secs } => Some(limit_secs),
            GameMode::Normal | GameMode::Hard => None,
        }
    }

    /// Token stored in save files.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            GameMode::Normal => "normale",
            GameMode::Timed { .. } => "tempo",
            GameMode::Hard => "difficile",
        }
    }

    /// Parse a save-file token. Timed games take their limit separately.
    #[must_use]
    pub fn from_token(token: &str, limit_secs: Option<u64>) -> Option<Self> {
        match token {
            "normale" => Some(GameMode::Normal),
            "tempo" => Some(GameMode::Timed {
                limit_secs: limit_secs.unwrap_or(DEFAULT_TIME_LIMIT_SECS),
            }),
            "difficile" => Some(GameMode::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Normal => f.write_str("normal"),
            GameMode::Timed { limit_secs } => write!(f, "timed ({}:{:02})", limit_secs / 60, limit_secs % 60),
            GameMode::Hard => f.write_str("hard"),
        }
    }
}

/// Points awarded per move, plus the post-win achievement thresholds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub tableau_to_tableau: u32,
    pub waste_to_tableau: u32,
    pub to_foundation: u32,
    pub draw: u32,
    pub recycle: u32,

    /// A win in at most this many moves earns `Achievement::Efficient`.
    pub efficient_moves: u32,

    /// A win with at least this score earns `Achievement::HighScore`.
    pub high_score: u32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            tableau_to_tableau: 3,
            waste_to_tableau: 5,
            to_foundation: 10,
            draw: 0,
            recycle: 0,
            efficient_moves: 50,
            high_score: 500,
        }
    }
}

/// How the stock is rebuilt from the waste.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecyclePolicy {
    /// Shuffle the waste before turning it over.
    #[default]
    Shuffle,
    /// Turn the waste over as-is.
    Reverse,
}

/// Rules engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    pub scoring: ScoreTable,
    pub recycle: RecyclePolicy,
}

impl RulesConfig {
    /// Use a custom score table.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoreTable) -> Self {
        self.scoring = scoring;
        self
    }

    /// Use a different recycle policy.
    #[must_use]
    pub fn with_recycle(mut self, recycle: RecyclePolicy) -> Self {
        self.recycle = recycle;
        self
    }
}
