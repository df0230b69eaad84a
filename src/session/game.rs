//! One game in progress, with a command per player action.
//!
//! Every command returns a `Result` whose `Display` is the message to show
//! the player. Commands without a `now` argument read the monotonic clock;
//! `play` takes it explicitly.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use smallvec::SmallVec;
use tracing::{info, warn};

use super::app::Theme;
use crate::advisor::{self, Hint};
use crate::core::action::{FoundationSource, Move, MoveOutcome};
use crate::core::config::GameMode;
use crate::core::error::{MoveError, SnapshotError};
use crate::core::state::GameState;
use crate::rules::{scoring, Achievement, GameResult, Klondike, RulesEngine};
use crate::snapshot::Snapshot;

/// A live game: rules, state and the theme it is shown with.
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: Klondike,
    state: GameState,
    theme: Theme,
}

impl GameSession {
    /// Deal a new game.
    #[must_use]
    pub fn new(engine: Klondike, seed: u64, mode: GameMode, theme: Theme, now: Instant) -> Self {
        let state = engine.new_game(seed, mode, now);
        Self::from_state(engine, state, theme)
    }

    /// Wrap an existing state.
    #[must_use]
    pub fn from_state(engine: Klondike, state: GameState, theme: Theme) -> Self {
        Self {
            engine,
            state,
            theme,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &Klondike {
        &self.engine
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    // === Moves ===

    /// Apply `mv` at `now`. A timed game that has run out rejects every
    /// move with `TimeExpired`.
    pub fn play(&mut self, mv: Move, now: Instant) -> Result<MoveOutcome, MoveError> {
        if !self.state.is_won() && self.state.is_time_expired(now) {
            return Err(MoveError::TimeExpired);
        }
        self.engine.apply_move(&mut self.state, &mv)
    }

    /// Draw from the stock, or rebuild it from the waste.
    pub fn draw(&mut self) -> Result<MoveOutcome, MoveError> {
        self.play(Move::Draw, Instant::now())
    }

    /// Move the face-up group of column `from` onto column `to`.
    pub fn move_tableau_to_tableau(&mut self, from: usize, to: usize) -> Result<MoveOutcome, MoveError> {
        self.play(Move::tableau(from, to), Instant::now())
    }

    /// Move the cards of column `from` starting at `start` onto column `to`.
    pub fn move_tableau_run(&mut self, from: usize, start: usize, to: usize) -> Result<MoveOutcome, MoveError> {
        self.play(Move::TableauToTableau { from, start, to }, Instant::now())
    }

    pub fn move_to_foundation(&mut self, source: FoundationSource) -> Result<MoveOutcome, MoveError> {
        self.play(Move::ToFoundation { source }, Instant::now())
    }

    pub fn move_waste_to_tableau(&mut self, to: usize) -> Result<MoveOutcome, MoveError> {
        self.play(Move::WasteToTableau { to }, Instant::now())
    }

    // === Advice ===

    #[must_use]
    pub fn hint(&self) -> Hint {
        advisor::advise(&self.state.layout)
    }

    /// Play whatever `hint` recommends. `Ok(None)` when there is nothing
    /// to play.
    pub fn apply_hint(&mut self) -> Result<Option<MoveOutcome>, MoveError> {
        match self.hint().to_move() {
            Some(mv) => self.play(mv, Instant::now()).map(Some),
            None => Ok(None),
        }
    }

    // === Status ===

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// No recommended move and nothing left in the stock.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        advisor::is_dead_end(&self.state.layout)
    }

    #[must_use]
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.state.time_remaining(now)
    }

    #[must_use]
    pub fn is_time_expired(&self, now: Instant) -> bool {
        self.state.is_time_expired(now)
    }

    /// How the game ended, if it has.
    #[must_use]
    pub fn result(&self, now: Instant) -> Option<GameResult> {
        if self.state.is_won() {
            Some(GameResult::Won)
        } else if self.state.is_time_expired(now) {
            Some(GameResult::TimeExpired)
        } else {
            self.engine.is_terminal(&self.state)
        }
    }

    /// Achievements earned. Empty until the game is won.
    #[must_use]
    pub fn achievements(&self, now: Instant) -> SmallVec<[Achievement; 3]> {
        scoring::achievements(&self.state, &self.engine.config().scoring, now)
    }

    // === Save and load ===

    #[must_use]
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        Snapshot::capture(&self.state, self.theme.name(), now)
    }

    /// The game as snapshot JSON.
    pub fn save_snapshot(&self) -> Result<String, SnapshotError> {
        self.snapshot(Instant::now()).to_json()
    }

    /// Replace the current game with the one in `text`. On error the
    /// current game is kept.
    pub fn load_snapshot(&mut self, text: &str) -> Result<(), SnapshotError> {
        self.load_snapshot_at(text, Instant::now())
    }

    pub fn load_snapshot_at(&mut self, text: &str, now: Instant) -> Result<(), SnapshotError> {
        let snapshot = Snapshot::from_json(text)?;
        let restored = snapshot.restore(now, self.state.rng.for_context("restore"))?;
        self.state = restored.state;
        self.theme = Theme::from_name(&restored.theme).unwrap_or_else(|| {
            warn!(target: "klondike.session", theme = %restored.theme, "unknown theme, using classic");
            Theme::Classic
        });
        Ok(())
    }

    /// Write the game to `path` as JSON.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        fs::write(path, self.save_snapshot()?)?;
        info!(target: "klondike.session", path = %path.display(), "game saved");
        Ok(())
    }

    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        self.load_snapshot(&text)?;
        info!(target: "klondike.session", path = %path.display(), "game loaded");
        Ok(())
    }

    /// File name used when the player does not choose one.
    #[must_use]
    pub fn default_save_name(unix_secs: u64) -> String {
        format!("solitario_salvataggio_{unix_secs}.json")
    }

    /// A player-chosen save name, with the `.json` extension added if missing.
    #[must_use]
    pub fn save_file_name(name: &str) -> String {
        if name.ends_with(".json") {
            name.to_string()
        } else {
            format!("{name}.json")
        }
    }
}
