//! A single ordered pile of cards.
//!
//! Index 0 is the bottom card; the last card is the top. Piles are backed by
//! `im::Vector`, so cloning a pile (and therefore a whole game) is O(1).

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Names one pile on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Waste,
    /// Tableau column, 0-indexed.
    Tableau(usize),
    Foundation(Suit),
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => f.write_str("stock"),
            PileId::Waste => f.write_str("waste"),
            PileId::Tableau(i) => write!(f, "column {}", i + 1),
            PileId::Foundation(suit) => write!(f, "{suit} foundation"),
        }
    }
}

/// An ordered pile, bottom to top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Bottom card, if any.
    #[must_use]
    pub fn bottom(&self) -> Option<&Card> {
        self.cards.front()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator + '_ {
        self.cards.iter()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Detach every card from `at` upward, keeping their order.
    ///
    /// Panics if `at > len()`.
    #[must_use]
    pub fn split_off(&mut self, at: usize) -> Pile {
        Pile {
            cards: self.cards.split_off(at),
        }
    }

    /// Place `other` on top of this pile, keeping its order.
    pub fn append(&mut self, other: Pile) {
        self.cards.append(other.cards);
    }

    /// Remove every card, bottom first.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards).into_iter().collect()
    }

    /// Turn the top card face-up. Returns true if it was face-down.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.back_mut() {
            Some(card) if !card.face_up => {
                card.flip_up();
                true
            }
            _ => false,
        }
    }

    /// Index of the first face-up card at or above `start`.
    #[must_use]
    pub fn first_face_up_from(&self, start: usize) -> Option<usize> {
        self.cards
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, c)| c.face_up)
            .map(|(i, _)| i)
    }

    /// Are the cards from `start` to the top a face-up, descending,
    /// alternating-colour run?
    #[must_use]
    pub fn is_run_from(&self, start: usize) -> bool {
        if start >= self.len() {
            return false;
        }
        let mut cards = self.cards.iter().skip(start);
        let Some(mut below) = cards.next() else {
            return false;
        };
        if !below.face_up {
            return false;
        }
        for card in cards {
            if !card.face_up || !card.stacks_on(below) {
                return false;
            }
            below = card;
        }
        true
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
