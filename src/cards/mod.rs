//! Cards and decks.
//!
//! ## Key Types
//!
//! - `Card`: suit, rank and face-up flag (a `Copy` value)
//! - `Suit`, `Rank`, `Color`: card identity and the colour class
//! - `Deck`: the 52-card set, standard or shuffled

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
