//! The full table: seven tableau columns, four foundations, stock and waste.
//!
//! `Layout` is a plain container with positional accessors. It knows nothing
//! about move legality; that lives in `rules::moves`. It can however verify
//! its own invariants with `check_integrity`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::pile::{Pile, PileId};
use crate::cards::{Card, Rank, Suit, DECK_SIZE};
use crate::core::error::IntegrityError;

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// Cards in a completed foundation.
pub const FOUNDATION_SIZE: usize = Rank::ALL.len();

/// Every pile on the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub tableau: [Pile; TABLEAU_COLUMNS],
    /// Indexed by `Suit::index()`.
    pub foundations: [Pile; 4],
    pub stock: Pile,
    pub waste: Pile,
}

impl Layout {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Pile> {
        self.tableau.get(index)
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Pile {
        &self.foundations[suit.index()]
    }

    pub fn foundation_mut(&mut self, suit: Suit) -> &mut Pile {
        &mut self.foundations[suit.index()]
    }

    /// Look up any pile by name.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Tableau(i) => self.tableau.get(i),
            PileId::Foundation(suit) => Some(self.foundation(suit)),
        }
    }

    /// All piles with their names, in a fixed order.
    pub fn piles(&self) -> impl Iterator<Item = (PileId, &Pile)> + '_ {
        let columns = self
            .tableau
            .iter()
            .enumerate()
            .map(|(i, p)| (PileId::Tableau(i), p));
        let foundations = Suit::ALL
            .into_iter()
            .map(move |s| (PileId::Foundation(s), self.foundation(s)));
        [(PileId::Stock, &self.stock), (PileId::Waste, &self.waste)]
            .into_iter()
            .chain(columns)
            .chain(foundations)
    }

    /// Total cards on the table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles().map(|(_, p)| p.len()).sum()
    }

    /// Cards already on foundations.
    #[must_use]
    pub fn foundation_cards(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    /// All four foundations complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.foundations.iter().all(|p| p.len() == FOUNDATION_SIZE)
    }

    /// Verify the table invariants:
    ///
    /// - exactly 52 cards, each `(suit, rank)` once;
    /// - each foundation holds its own suit as Ace, 2, 3, ... bottom to top;
    /// - waste and foundation cards are face-up, stock cards face-down;
    /// - a non-empty column has a face-up top, and its face-up cards form one
    ///   descending alternating-colour run above the face-down ones.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        let mut seen = FxHashSet::default();
        for (_, pile) in self.piles() {
            for card in pile.iter() {
                if !seen.insert(card.identity()) {
                    return Err(IntegrityError::Duplicate {
                        suit: card.suit,
                        rank: card.rank,
                    });
                }
            }
        }

        let total = self.total_cards();
        if total != DECK_SIZE {
            return Err(IntegrityError::CardCount(total));
        }

        for suit in Suit::ALL {
            for (position, card) in self.foundation(suit).iter().enumerate() {
                if !is_foundation_slot(card, suit, position) {
                    return Err(IntegrityError::FoundationOrder {
                        suit,
                        position,
                        found: format!("{}{}", card.rank, card.suit),
                    });
                }
                if !card.face_up {
                    return Err(IntegrityError::HiddenCard("foundation"));
                }
            }
        }

        if self.waste.iter().any(|c| !c.face_up) {
            return Err(IntegrityError::HiddenCard("waste"));
        }
        if self.stock.iter().any(|c| c.face_up) {
            return Err(IntegrityError::FaceUpStock);
        }

        for (index, column) in self.tableau.iter().enumerate() {
            let Some(top) = column.top() else {
                continue;
            };
            if !top.face_up {
                return Err(IntegrityError::HiddenColumnTop(index));
            }
            // A face-down card above a face-up one also breaks the run.
            let first_up = column.first_face_up_from(0).unwrap_or(0);
            if !column.is_run_from(first_up) {
                return Err(IntegrityError::BrokenColumnRun(index));
            }
        }

        Ok(())
    }
}

/// Does `card` belong at `position` (0 = Ace) of the `suit` foundation?
fn is_foundation_slot(card: &Card, suit: Suit, position: usize) -> bool {
    card.suit == suit && usize::from(card.rank.value()) == position + 1
}
