//! Playing cards: suit, rank, colour and the face-up flag.
//!
//! A `Card` is a small `Copy` value. Its identity is the `(suit, rank)` pair;
//! `face_up` is the only mutable part and travels with the card when it
//! moves between piles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Card colour, used for the alternating-colour tableau rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// All suits in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    /// Position of this suit in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Spade => 0,
            Suit::Heart => 1,
            Suit::Diamond => 2,
            Suit::Club => 3,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Heart | Suit::Diamond => Color::Red,
            Suit::Spade | Suit::Club => Color::Black,
        }
    }

    /// Symbol used on screen and in save files.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }

    /// Parse a suit symbol. Accepts exactly one character.
    #[must_use]
    pub fn from_symbol(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let symbol = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Suit::ALL.into_iter().find(|s| s.symbol() == symbol)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank. Discriminants are the numeric values (Ace = 1, King = 13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, Ace = 1 through King = 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value in `1..=13`.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// Token used on screen and in save files (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.token() == token)
    }

    /// True when `self` sits directly on `other` in a tableau run.
    #[must_use]
    pub const fn is_one_below(self, other: Rank) -> bool {
        self.value() + 1 == other.value()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// The `(suit, rank)` identity, ignoring the face-up flag.
    #[must_use]
    pub const fn identity(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    /// Can `self` be placed on `target` in a tableau column?
    ///
    /// Requires opposite colours and `self` exactly one rank lower.
    #[must_use]
    pub fn stacks_on(&self, target: &Card) -> bool {
        self.color() != target.color() && self.rank.is_one_below(target.rank)
    }

    pub fn flip_up(&mut self) {
        self.face_up = true;
    }

    pub fn flip_down(&mut self) {
        self.face_up = false;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank, self.suit)
        } else {
            f.write_str("##")
        }
    }
}
