//! Converting between `GameState` and `Snapshot`, and encoding snapshots.
//!
//! - JSON (`Snapshot::to_json`) is the save-file format.
//! - `Checkpoint` is a compact bincode form that also carries the RNG
//!   position, so a restored game shuffles exactly as the saved one would.
//!
//! Restoring never repairs anything. A snapshot whose cards, piles or mode
//! do not describe a legal table is rejected with `SnapshotError::Corrupt`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::format::{CardRecord, Snapshot};
use crate::cards::{Card, Rank, Suit};
use crate::core::config::GameMode;
use crate::core::error::SnapshotError;
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::{GameClock, GameState};
use crate::zones::{Layout, Pile, TABLEAU_COLUMNS};

/// A game rebuilt from a snapshot, plus its cosmetic theme name.
#[derive(Clone, Debug)]
pub struct RestoredGame {
    pub state: GameState,
    pub theme: String,
}

fn records(pile: &Pile) -> Vec<CardRecord> {
    pile.iter().map(CardRecord::from).collect()
}

fn parse_card(record: &CardRecord) -> Result<Card, SnapshotError> {
    let suit = Suit::from_symbol(&record.suit)
        .ok_or_else(|| SnapshotError::corrupt(format!("unknown suit {:?}", record.suit)))?;
    let rank = Rank::from_token(&record.rank)
        .ok_or_else(|| SnapshotError::corrupt(format!("unknown rank {:?}", record.rank)))?;
    Ok(Card {
        suit,
        rank,
        face_up: record.face_up,
    })
}

fn parse_pile(records: &[CardRecord]) -> Result<Pile, SnapshotError> {
    records.iter().map(parse_card).collect()
}

impl Snapshot {
    /// Capture `state` at `now`.
    #[must_use]
    pub fn capture(state: &GameState, theme: &str, now: Instant) -> Self {
        let layout = &state.layout;
        Self {
            stock: records(&layout.stock),
            waste: records(&layout.waste),
            columns: layout.tableau.iter().map(records).collect(),
            foundations: Suit::ALL
                .into_iter()
                .map(|s| (s.symbol().to_string(), records(layout.foundation(s))))
                .collect(),
            score: state.score,
            moves: state.move_count,
            elapsed_secs: state.elapsed(now).as_secs(),
            mode: state.mode.token().to_string(),
            theme: theme.to_string(),
            time_limit_secs: state.mode.time_limit_secs(),
        }
    }

    /// Rebuild the game. The clock resumes so that `now` shows the saved
    /// elapsed time. `rng` drives later recycle shuffles.
    pub fn restore(&self, now: Instant, rng: GameRng) -> Result<RestoredGame, SnapshotError> {
        let result = self.rebuild(now, rng);
        if let Err(err) = &result {
            warn!(target: "klondike.snapshot", error = %err, "snapshot rejected");
        }
        result
    }

    fn rebuild(&self, now: Instant, rng: GameRng) -> Result<RestoredGame, SnapshotError> {
        if self.columns.len() != TABLEAU_COLUMNS {
            return Err(SnapshotError::corrupt(format!(
                "{} columns, expected {}",
                self.columns.len(),
                TABLEAU_COLUMNS
            )));
        }

        let mut layout = Layout::new();
        layout.stock = parse_pile(&self.stock)?;
        layout.waste = parse_pile(&self.waste)?;
        for (column, records) in layout.tableau.iter_mut().zip(&self.columns) {
            *column = parse_pile(records)?;
        }
        for (key, records) in &self.foundations {
            let suit = Suit::from_symbol(key)
                .ok_or_else(|| SnapshotError::corrupt(format!("unknown foundation {key:?}")))?;
            *layout.foundation_mut(suit) = parse_pile(records)?;
        }
        layout.check_integrity()?;

        let mode = GameMode::from_token(&self.mode, self.time_limit_secs)
            .ok_or_else(|| SnapshotError::corrupt(format!("unknown mode {:?}", self.mode)))?;

        let clock = GameClock::resumed(now, Duration::from_secs(self.elapsed_secs))
            .ok_or_else(|| SnapshotError::corrupt("elapsed time out of range"))?;

        let state = GameState {
            layout,
            score: self.score,
            move_count: self.moves,
            mode,
            clock,
            rng,
        };
        info!(
            target: "klondike.snapshot",
            mode = %mode,
            score = state.score,
            moves = state.move_count,
            "snapshot restored"
        );
        Ok(RestoredGame {
            state,
            theme: self.theme.clone(),
        })
    }

    /// Pretty JSON text, with suit symbols kept as UTF-8.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[instrument(target = "klondike.snapshot", level = "debug", skip_all, fields(bytes = text.len()))]
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// A snapshot plus the RNG position, in binary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub snapshot: Snapshot,
    pub rng: GameRngState,
}

impl Checkpoint {
    #[must_use]
    pub fn capture(state: &GameState, theme: &str, now: Instant) -> Self {
        Self {
            snapshot: Snapshot::capture(state, theme, now),
            rng: state.rng.state(),
        }
    }

    pub fn restore(&self, now: Instant) -> Result<RestoredGame, SnapshotError> {
        self.snapshot.restore(now, GameRng::from_state(&self.rng))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
