//! Move representation and move outcomes.
//!
//! A `Move` is what the player asks for. A `MoveOutcome` is what actually
//! happened once the rules engine accepted it: a `Draw` request becomes a
//! `MoveKind::Recycle` when the stock was empty, points are awarded, a card
//! may be revealed, and the move may have won the game.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Where a card headed for a foundation comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoundationSource {
    Waste,
    /// Top card of a tableau column, 0-indexed.
    Tableau(usize),
}

impl fmt::Display for FoundationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoundationSource::Waste => f.write_str("the waste"),
            FoundationSource::Tableau(i) => write!(f, "column {}", i + 1),
        }
    }
}

/// A player move. Column indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Draw from the stock, or recycle the waste when the stock is empty.
    Draw,
    /// Move the face-up group starting at the first face-up card at or
    /// above `start` from column `from` onto column `to`.
    TableauToTableau { from: usize, start: usize, to: usize },
    WasteToTableau { to: usize },
    ToFoundation { source: FoundationSource },
}

impl Move {
    /// Move the whole face-up run of `from` onto `to`.
    #[must_use]
    pub const fn tableau(from: usize, to: usize) -> Self {
        Move::TableauToTableau { from, start: 0, to }
    }

    #[must_use]
    pub const fn waste_to_foundation() -> Self {
        Move::ToFoundation {
            source: FoundationSource::Waste,
        }
    }

    #[must_use]
    pub const fn column_to_foundation(column: usize) -> Self {
        Move::ToFoundation {
            source: FoundationSource::Tableau(column),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Draw => f.write_str("draw a card"),
            Move::TableauToTableau { from, to, .. } => {
                write!(f, "move from column {} to column {}", from + 1, to + 1)
            }
            Move::WasteToTableau { to } => write!(f, "move the waste card to column {}", to + 1),
            Move::ToFoundation { source } => write!(f, "move from {source} to its foundation"),
        }
    }
}

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Draw,
    Recycle,
    TableauToTableau,
    WasteToTableau,
    ToFoundation,
}

/// Result of a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move as requested.
    pub requested: Move,

    pub kind: MoveKind,

    /// Points added to the score.
    pub points: u32,

    /// Cards that changed pile.
    pub cards_moved: usize,

    /// A face-down column card was turned up.
    pub revealed: bool,

    /// This move completed the foundations.
    pub won: bool,
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Draw => f.write_str("Drew a card")?,
            MoveKind::Recycle => {
                write!(f, "Stock rebuilt from {} waste cards", self.cards_moved)?
            }
            MoveKind::TableauToTableau
            | MoveKind::WasteToTableau
            | MoveKind::ToFoundation => {
                write!(f, "Done: {}", self.requested)?;
                if self.points > 0 {
                    write!(f, " (+{})", self.points)?;
                }
            }
        }
        if self.won {
            f.write_str(". You won!")?;
        }
        Ok(())
    }
}

/// Move list sized for a typical position without heap allocation.
pub type MoveList = SmallVec<[Move; 16]>;
