//! Move advisor.
//!
//! A deterministic, single-step heuristic that proposes one move. It reads
//! the table through the rules engine's legality predicates and never
//! mutates anything.

pub mod hint;

pub use hint::{advise, is_dead_end, Hint};
