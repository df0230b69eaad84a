//! Player-facing layer over the rules.
//!
//! ## Key Types
//!
//! - `GameSession`: one game plus its theme, one method per command
//! - `App`: main menu / in game / exited state machine
//! - `Preferences`, `Theme`: settings kept between games

pub mod app;
pub mod game;

pub use app::{App, MenuCommand, Preferences, Screen, Theme};
pub use game::GameSession;
