//! Piles and the table layout.
//!
//! ## Key Types
//!
//! - `Pile`: ordered cards, bottom to top, O(1) clone
//! - `PileId`: names the stock, waste, a column or a foundation
//! - `Layout`: all thirteen piles plus integrity checks

pub mod layout;
pub mod pile;

pub use layout::{Layout, FOUNDATION_SIZE, TABLEAU_COLUMNS};
pub use pile::{Pile, PileId};
