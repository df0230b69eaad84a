//! Scoring, win detection and post-win achievements.
//!
//! Points only ever accumulate; there are no penalties.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::action::MoveKind;
use crate::core::config::ScoreTable;
use crate::core::state::GameState;
use crate::zones::Layout;

/// Points a move of this kind is worth.
#[must_use]
pub fn points_for(kind: MoveKind, table: &ScoreTable) -> u32 {
    match kind {
        MoveKind::Draw => table.draw,
        MoveKind::Recycle => table.recycle,
        MoveKind::TableauToTableau => table.tableau_to_tableau,
        MoveKind::WasteToTableau => table.waste_to_tableau,
        MoveKind::ToFoundation => table.to_foundation,
    }
}

/// Count an accepted move and add its points. Returns the points added.
pub fn award(state: &mut GameState, kind: MoveKind, table: &ScoreTable) -> u32 {
    let points = points_for(kind, table);
    state.move_count = state.move_count.saturating_add(1);
    state.score = state.score.saturating_add(points);
    points
}

/// All four foundations hold 13 cards.
#[must_use]
pub fn is_won(layout: &Layout) -> bool {
    layout.is_complete()
}

/// Objectives shown after a win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Achievement {
    /// Won within `ScoreTable::efficient_moves` moves.
    Efficient,
    /// Finished with at least `ScoreTable::high_score` points.
    HighScore,
    /// Won a timed game before the limit.
    BeatTheClock,
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Achievement::Efficient => f.write_str("Won in very few moves"),
            Achievement::HighScore => f.write_str("High score"),
            Achievement::BeatTheClock => f.write_str("Beat the clock"),
        }
    }
}

/// Achievements earned by a finished game. Empty unless the game is won.
#[must_use]
pub fn achievements(state: &GameState, table: &ScoreTable, now: Instant) -> SmallVec<[Achievement; 3]> {
    let mut earned = SmallVec::new();
    if !state.is_won() {
        return earned;
    }

    if state.move_count <= table.efficient_moves {
        earned.push(Achievement::Efficient);
    }
    if state.score >= table.high_score {
        earned.push(Achievement::HighScore);
    }
    if let Some(limit) = state.mode.time_limit_secs() {
        if state.elapsed(now).as_secs() <= limit {
            earned.push(Achievement::BeatTheClock);
        }
    }
    earned
}
