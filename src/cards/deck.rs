//! Deck construction and shuffling.

use rustc_hash::FxHashSet;

use super::card::{Card, Rank, Suit};
use crate::core::error::DealError;
use crate::core::rng::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered deck. The last card is the next one dealt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The 52 cards, suit-major in `Suit::ALL` order, Ace to King, face-down.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// A standard deck in uniformly random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Accept an externally chosen ordering, e.g. for reproducible deals.
    ///
    /// Every card is turned face-down.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DealError> {
        if cards.len() != DECK_SIZE {
            return Err(DealError::WrongSize(cards.len()));
        }

        let mut seen = FxHashSet::default();
        for card in &cards {
            if !seen.insert(card.identity()) {
                return Err(DealError::Duplicate {
                    suit: card.suit,
                    rank: card.rank,
                });
            }
        }

        let cards = cards
            .into_iter()
            .map(|c| Card::new(c.suit, c.rank))
            .collect();
        Ok(Self { cards })
    }

    /// Take the next card from the end of the deck.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);
        assert!(deck.cards().iter().all(|c| !c.face_up));
        assert_eq!(deck.cards()[0], Card::new(Suit::Spade, Rank::Ace));
        assert_eq!(deck.cards()[51], Card::new(Suit::Club, Rank::King));

        let unique: FxHashSet<_> = deck.cards().iter().map(Card::identity).collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(7);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        assert_ne!(deck, Deck::standard());

        let mut sorted = deck.into_cards();
        sorted.sort_by_key(|c| (c.suit, c.rank));
        assert_eq!(sorted, Deck::standard().into_cards());
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let a = Deck::shuffled(&mut GameRng::new(99));
        let b = Deck::shuffled(&mut GameRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_cards_rejects_short_deck() {
        let mut cards = Deck::standard().into_cards();
        cards.pop();
        assert_eq!(Deck::from_cards(cards), Err(DealError::WrongSize(51)));
    }

    #[test]
    fn test_from_cards_rejects_duplicates() {
        let mut cards = Deck::standard().into_cards();
        cards[1] = cards[0];
        assert_eq!(
            Deck::from_cards(cards),
            Err(DealError::Duplicate {
                suit: Suit::Spade,
                rank: Rank::Ace
            })
        );
    }

    #[test]
    fn test_from_cards_turns_cards_down() {
        let cards: Vec<_> = Deck::standard()
            .into_cards()
            .into_iter()
            .map(|c| Card::face_up(c.suit, c.rank))
            .collect();
        let deck = Deck::from_cards(cards).unwrap();
        assert!(deck.cards().iter().all(|c| !c.face_up));
    }
}
