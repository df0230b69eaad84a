//! Error types.
//!
//! - `MoveError`: expected, recoverable move rejections. State is untouched.
//! - `SnapshotError`: a save file that cannot be turned back into a game.
//! - `DealError`: an externally supplied deck that is not a full deck.
//! - `IntegrityError`: a broken pile invariant. Move operations never
//!   produce one; seeing it means a bug or a hand-edited snapshot.

use thiserror::Error;

use crate::cards::{Rank, Suit};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid column index")]
    InvalidColumnIndex,

    #[error("source column is empty")]
    EmptySourceColumn,

    #[error("no face-up card to move")]
    NoFaceUpCard,

    #[error("illegal sequence or colour for this move")]
    IllegalSequenceOrColor,

    #[error("only a King can be moved to an empty column")]
    OnlyKingToEmptyColumn,

    #[error("the waste is empty")]
    EmptyWaste,

    #[error("nothing to move from that pile")]
    EmptySource,

    #[error("the card is face down")]
    SourceCardFaceDown,

    #[error("card does not fit on its foundation")]
    WrongSuitOrSequence,

    #[error("no cards left to draw or recycle")]
    NoCardsToDraw,

    #[error("the game is over")]
    GameOver,

    #[error("time is up")]
    TimeExpired,
}

/// Failure to restore a game from a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("malformed binary snapshot: {0}")]
    Binary(#[from] bincode::Error),

    #[error("corrupt snapshot: {0}")]
    Corrupt(String),

    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SnapshotError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        SnapshotError::Corrupt(reason.into())
    }
}

impl From<IntegrityError> for SnapshotError {
    fn from(err: IntegrityError) -> Self {
        SnapshotError::Corrupt(err.to_string())
    }
}

/// A deck handed to the dealer is not the 52 distinct cards.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("deck has {0} cards, expected 52")]
    WrongSize(usize),

    #[error("deck contains {rank}{suit} more than once")]
    Duplicate { suit: Suit, rank: Rank },
}

/// A pile invariant does not hold.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("{0} cards in play, expected 52")]
    CardCount(usize),

    #[error("{rank}{suit} appears more than once")]
    Duplicate { suit: Suit, rank: Rank },

    #[error("{suit} foundation holds {found} at position {position}")]
    FoundationOrder {
        suit: Suit,
        position: usize,
        found: String,
    },

    #[error("{0} has a face-down card where only face-up cards are allowed")]
    HiddenCard(&'static str),

    #[error("column {} has a face-down top card", .0 + 1)]
    HiddenColumnTop(usize),

    #[error("column {} face-up cards are not one descending alternating run", .0 + 1)]
    BrokenColumnRun(usize),

    #[error("stock has a face-up card")]
    FaceUpStock,
}
