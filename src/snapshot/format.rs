//! On-disk snapshot format.
//!
//! Field names match the save files written by earlier versions of the game,
//! so they are kept in Italian on the wire:
//!
//! ```json
//! {
//!   "riserva": [{ "seme": "♠", "valore": "A", "scoperta": false }],
//!   "scarti": [],
//!   "colonne": [[], [], [], [], [], [], []],
//!   "pile_finali": { "♠": [], "♥": [], "♦": [], "♣": [] },
//!   "punteggio": 0,
//!   "mosse": 0,
//!   "tempo_gioco": 0,
//!   "modalita": "normale",
//!   "tema": "classico",
//!   "tempo_limite": null
//! }
//! ```
//!
//! Suit and rank are kept as raw strings here; `codec` validates them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// One card on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Suit symbol.
    #[serde(rename = "seme")]
    pub suit: String,

    /// Rank token.
    #[serde(rename = "valore")]
    pub rank: String,

    #[serde(rename = "scoperta")]
    pub face_up: bool,
}

impl From<&Card> for CardRecord {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit.symbol().to_string(),
            rank: card.rank.token().to_string(),
            face_up: card.face_up,
        }
    }
}

fn default_mode() -> String {
    "normale".to_string()
}

fn default_theme() -> String {
    "classico".to_string()
}

/// A complete saved game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "riserva")]
    pub stock: Vec<CardRecord>,

    #[serde(rename = "scarti")]
    pub waste: Vec<CardRecord>,

    /// Tableau columns, left to right.
    #[serde(rename = "colonne")]
    pub columns: Vec<Vec<CardRecord>>,

    /// Foundations keyed by suit symbol.
    #[serde(rename = "pile_finali")]
    pub foundations: BTreeMap<String, Vec<CardRecord>>,

    #[serde(rename = "punteggio")]
    pub score: u32,

    #[serde(rename = "mosse")]
    pub moves: u32,

    /// Seconds played when the snapshot was taken.
    #[serde(rename = "tempo_gioco")]
    pub elapsed_secs: u64,

    #[serde(rename = "modalita", default = "default_mode")]
    pub mode: String,

    #[serde(rename = "tema", default = "default_theme")]
    pub theme: String,

    #[serde(rename = "tempo_limite", default)]
    pub time_limit_secs: Option<u64>,
}
