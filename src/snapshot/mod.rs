//! Save and restore.
//!
//! - `format`: the serde tree written to save files
//! - `codec`: capture/restore against `GameState`, JSON encoding, and the
//!   binary `Checkpoint`

pub mod codec;
pub mod format;

pub use codec::{Checkpoint, RestoredGame};
pub use format::{CardRecord, Snapshot};
