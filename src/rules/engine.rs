//! Rules engine trait and the Klondike implementation.

use std::time::Instant;

use tracing::info;

use crate::advisor;
use crate::cards::Deck;
use crate::core::action::{Move, MoveList, MoveOutcome};
use crate::core::config::{GameMode, RulesConfig};
use crate::core::error::MoveError;
use crate::core::rng::GameRng;
use crate::core::state::GameState;

use super::{dealer, moves};

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// All foundations complete.
    Won,
    /// No useful move and the stock is exhausted.
    Stuck,
    /// A timed game ran out. Only reported by callers that track time.
    TimeExpired,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_move` must be atomic: on `Err` the state is unchanged
/// - `apply_move` must be deterministic given the state's RNG
/// - `is_terminal` returns `None` while the game continues
pub trait RulesEngine {
    fn config(&self) -> &RulesConfig;

    /// Every move that `apply_move` would accept.
    fn legal_moves(&self, state: &GameState) -> MoveList;

    /// Validate and execute a move.
    fn apply_move(&self, state: &mut GameState, mv: &Move) -> Result<MoveOutcome, MoveError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Would `mv` be accepted?
    fn is_legal(&self, state: &GameState, mv: &Move) -> bool {
        self.legal_moves(state).contains(mv)
    }
}

/// Klondike patience rules.
#[derive(Clone, Debug, Default)]
pub struct Klondike {
    config: RulesConfig,
}

impl Klondike {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Shuffle and deal a new game. The same seed always gives the same
    /// deal and the same recycle shuffles.
    #[must_use]
    pub fn new_game(&self, seed: u64, mode: GameMode, now: Instant) -> GameState {
        let rng = GameRng::new(seed);
        let deck = Deck::shuffled(&mut rng.for_context("deal"));
        info!(target: "klondike.rules", seed, mode = %mode, "new game");
        self.new_game_from_deck(deck, mode, rng.for_context("recycle"), now)
    }

    /// Deal a caller-chosen deck order.
    #[must_use]
    pub fn new_game_from_deck(&self, deck: Deck, mode: GameMode, rng: GameRng, now: Instant) -> GameState {
        GameState::new(dealer::deal(deck, mode), mode, rng, now)
    }
}

impl RulesEngine for Klondike {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn legal_moves(&self, state: &GameState) -> MoveList {
        moves::legal_moves(&state.layout)
    }

    fn apply_move(&self, state: &mut GameState, mv: &Move) -> Result<MoveOutcome, MoveError> {
        moves::apply(state, &self.config, mv)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if state.is_won() {
            Some(GameResult::Won)
        } else if advisor::is_dead_end(&state.layout) {
            Some(GameResult::Stuck)
        } else {
            None
        }
    }

    fn is_legal(&self, state: &GameState, mv: &Move) -> bool {
        moves::check(&state.layout, mv).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::zones::Pile;

    #[test]
    fn test_new_game_is_dealt() {
        let engine = Klondike::default();
        let state = engine.new_game(42, GameMode::Normal, Instant::now());

        assert_eq!(state.layout.check_integrity(), Ok(()));
        assert_eq!(state.layout.stock.len(), 24);
        assert_eq!(state.score, 0);
        assert_eq!(state.move_count, 0);
        assert_eq!(engine.is_terminal(&state), None);
    }

    #[test]
    fn test_same_seed_same_game() {
        let engine = Klondike::default();
        let now = Instant::now();
        let a = engine.new_game(7, GameMode::Normal, now);
        let b = engine.new_game(7, GameMode::Normal, now);
        let c = engine.new_game(8, GameMode::Normal, now);
        assert_eq!(a.layout, b.layout);
        assert_ne!(a.layout, c.layout);
    }

    #[test]
    fn test_legal_moves_all_apply() {
        let engine = Klondike::default();
        let state = engine.new_game(1234, GameMode::Normal, Instant::now());

        let legal = engine.legal_moves(&state);
        assert!(legal.contains(&Move::Draw));
        for mv in &legal {
            let mut copy = state.clone();
            assert!(engine.is_legal(&state, mv));
            assert!(engine.apply_move(&mut copy, mv).is_ok(), "{mv:?} should apply");
        }
    }

    #[test]
    fn test_won_game_is_terminal_and_rejects_moves() {
        let engine = Klondike::default();
        let mut state = engine.new_game(3, GameMode::Normal, Instant::now());
        state.layout = crate::zones::Layout::new();
        for suit in Suit::ALL {
            state.layout.foundations[suit.index()] =
                Rank::ALL.into_iter().map(|r| Card::face_up(suit, r)).collect::<Pile>();
        }

        assert_eq!(engine.is_terminal(&state), Some(GameResult::Won));
        assert!(engine.legal_moves(&state).is_empty());
        assert_eq!(engine.apply_move(&mut state, &Move::Draw), Err(MoveError::GameOver));
    }
}
