//! Greedy hint heuristic.
//!
//! A fixed priority table, checked in order; the first rule that finds a
//! legal move wins:
//!
//! 1. a tableau top card onto its foundation (columns left to right)
//! 2. the waste card onto its foundation
//! 3. the waste card onto the first column that takes it
//! 4. the lowest face-up group of a column onto another column, never
//!    shifting a whole column into an empty one
//! 5. draw, if the stock has cards
//! 6. nothing
//!
//! There is no lookahead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::action::{FoundationSource, Move};
use crate::rules::moves;
use crate::zones::{Layout, TABLEAU_COLUMNS};

/// The advisor's recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    /// Play this move.
    Move(Move),
    /// Nothing better to do than draw from the stock.
    Draw,
    /// No recommended move.
    NoMove,
}

impl Hint {
    /// The move to play, if any.
    #[must_use]
    pub fn to_move(self) -> Option<Move> {
        match self {
            Hint::Move(mv) => Some(mv),
            Hint::Draw => Some(Move::Draw),
            Hint::NoMove => None,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Move(mv) => write!(f, "Hint: {mv}"),
            Hint::Draw => f.write_str("Hint: draw a card from the stock"),
            Hint::NoMove => f.write_str("No recommended move: try recycling the waste"),
        }
    }
}

/// Recommend one move for `layout`.
#[must_use]
pub fn advise(layout: &Layout) -> Hint {
    if layout.is_complete() {
        return Hint::NoMove;
    }

    let rules: [fn(&Layout) -> Option<Move>; 4] = [
        column_to_foundation,
        waste_to_foundation,
        waste_to_column,
        column_to_column,
    ];
    if let Some(mv) = rules.iter().find_map(|rule| rule(layout)) {
        return Hint::Move(mv);
    }

    if layout.stock.is_empty() {
        Hint::NoMove
    } else {
        Hint::Draw
    }
}

/// The advisor has nothing and the stock is empty: the game is lost.
#[must_use]
pub fn is_dead_end(layout: &Layout) -> bool {
    !layout.is_complete() && layout.stock.is_empty() && advise(layout) == Hint::NoMove
}

fn column_to_foundation(layout: &Layout) -> Option<Move> {
    (0..TABLEAU_COLUMNS)
        .find(|&i| moves::check_to_foundation(layout, FoundationSource::Tableau(i)).is_ok())
        .map(Move::column_to_foundation)
}

fn waste_to_foundation(layout: &Layout) -> Option<Move> {
    moves::check_to_foundation(layout, FoundationSource::Waste)
        .ok()
        .map(|_| Move::waste_to_foundation())
}

fn waste_to_column(layout: &Layout) -> Option<Move> {
    (0..TABLEAU_COLUMNS)
        .find(|&to| moves::check_waste_to_tableau(layout, to).is_ok())
        .map(|to| Move::WasteToTableau { to })
}

fn column_to_column(layout: &Layout) -> Option<Move> {
    for (from, source) in layout.tableau.iter().enumerate() {
        let Some(lowest) = source.first_face_up_from(0) else {
            continue;
        };
        for (to, dest) in layout.tableau.iter().enumerate() {
            if to == from {
                continue;
            }
            // Moving a whole column into an empty one changes nothing.
            if dest.is_empty() && lowest == 0 {
                continue;
            }
            if moves::check_tableau_to_tableau(layout, from, lowest, to).is_ok() {
                return Some(Move::TableauToTableau {
                    from,
                    start: lowest,
                    to,
                });
            }
        }
    }
    None
}
