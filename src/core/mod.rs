//! Core engine types: moves, state, RNG, configuration and errors.
//!
//! Everything here is independent of the specific move rules, which live in
//! `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{FoundationSource, Move, MoveKind, MoveList, MoveOutcome};
pub use config::{
    GameMode, RecyclePolicy, RulesConfig, ScoreTable, DEFAULT_TIME_LIMIT_SECS, TIME_LIMIT_PRESETS,
};
pub use error::{DealError, IntegrityError, MoveError, SnapshotError};
pub use rng::{GameRng, GameRngState};
pub use state::{GameClock, GameState};
