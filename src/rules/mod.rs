//! Klondike rules: dealing, move legality and execution, scoring.
//!
//! - `dealer`: lays a deck out into the tableau and stock
//! - `moves`: legality predicates and atomic move execution
//! - `scoring`: points, win detection, achievements
//! - `engine`: the `RulesEngine` trait and its `Klondike` implementation

pub mod dealer;
pub mod engine;
pub mod moves;
pub mod scoring;

pub use dealer::deal;
pub use engine::{GameResult, Klondike, RulesEngine};
pub use moves::DrawAction;
pub use scoring::Achievement;
