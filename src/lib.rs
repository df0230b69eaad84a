//! # rust-klondike
//!
//! A Klondike patience rules engine: cards and piles, move legality and
//! execution, scoring, a move advisor, and save/restore snapshots.
//!
//! ## Design Principles
//!
//! 1. **Atomic Moves**: A move either applies completely or is rejected with
//!    a `MoveError` and leaves the state untouched.
//!
//! 2. **No Hidden Clocks**: The rules never read the time. Anything that
//!    depends on elapsed time takes `now: Instant`.
//!
//! 3. **Deterministic**: A seed fixes the deal and every recycle shuffle.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles are `im::Vector`s, so a
//!   `GameState` clones in O(1). The advisor and tests clone freely.
//!
//! - **One Set of Predicates**: Move execution, `legal_moves` and the
//!   advisor all use the same legality checks in `rules::moves`.
//!
//! ## Modules
//!
//! - `core`: moves, state, RNG, configuration, errors
//! - `cards`: cards and decks
//! - `zones`: piles and the table layout
//! - `rules`: dealing, move rules, scoring, the `RulesEngine` trait
//! - `advisor`: hint heuristic
//! - `snapshot`: save-file format and codec
//! - `session`: per-game command surface and menu state machine

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod advisor;
pub mod snapshot;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    FoundationSource, Move, MoveKind, MoveList, MoveOutcome,
    GameMode, RecyclePolicy, RulesConfig, ScoreTable,
    DealError, IntegrityError, MoveError, SnapshotError,
    GameRng, GameRngState,
    GameClock, GameState,
};

pub use crate::cards::{Card, Color, Deck, Rank, Suit};

pub use crate::zones::{Layout, Pile, PileId};

pub use crate::rules::{Achievement, GameResult, Klondike, RulesEngine};

pub use crate::advisor::Hint;

pub use crate::snapshot::Snapshot;

pub use crate::session::{App, GameSession, MenuCommand, Preferences, Screen, Theme};
