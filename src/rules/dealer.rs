//! Dealing a deck onto the table.

use tracing::debug;

use crate::cards::Deck;
use crate::core::config::GameMode;
use crate::zones::{Layout, Pile, TABLEAU_COLUMNS};

/// Should the card dealt to `row` of `column` start face-up?
///
/// Only the top card of each column. The mode does not change the deal;
/// `Hard` differs in name and save-file token only.
fn starts_face_up(column: usize, row: usize) -> bool {
    row == column
}

/// Deal `deck` into the tableau and stock.
///
/// Column `i` receives `i + 1` cards taken from the end of the deck, one
/// column at a time. Whatever is left becomes the stock, face-down and in
/// deck order, so its last card is the first one drawn.
#[must_use]
pub fn deal(mut deck: Deck, mode: GameMode) -> Layout {
    let mut layout = Layout::new();

    for (column, pile) in layout.tableau.iter_mut().enumerate() {
        for row in 0..=column {
            let Some(mut card) = deck.pop() else {
                break;
            };
            if starts_face_up(column, row) {
                card.flip_up();
            } else {
                card.flip_down();
            }
            pile.push(card);
        }
    }

    let stock: Pile = deck
        .into_cards()
        .into_iter()
        .map(|mut c| {
            c.flip_down();
            c
        })
        .collect();
    layout.stock = stock;

    debug!(
        target: "klondike.rules",
        mode = %mode,
        stock = layout.stock.len(),
        "dealt {} columns",
        TABLEAU_COLUMNS
    );
    layout
}
