//! Game state: the table plus counters, mode, clock and RNG.
//!
//! `GameState` is mutated only by the rules engine. Cloning is O(1) because
//! every pile is a persistent vector.
//!
//! ## Time
//!
//! The state never reads the wall clock. It keeps the `Instant` the game
//! started at; callers pass `now` whenever elapsed time matters.

use std::time::{Duration, Instant};

use super::config::GameMode;
use super::rng::GameRng;
use crate::zones::Layout;

/// Start instant of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameClock {
    started: Instant,
}

impl GameClock {
    #[must_use]
    pub fn started_at(started: Instant) -> Self {
        Self { started }
    }

    /// A clock that has already run for `elapsed` at `now`.
    ///
    /// Returns `None` if `now - elapsed` is not representable.
    #[must_use]
    pub fn resumed(now: Instant, elapsed: Duration) -> Option<Self> {
        now.checked_sub(elapsed).map(Self::started_at)
    }

    #[must_use]
    pub fn started(&self) -> Instant {
        self.started
    }

    /// Time played so far. Zero if `now` is before the start.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// All piles.
    pub layout: Layout,

    /// Points so far. Never decreases.
    pub score: u32,

    /// Accepted moves, including draws and recycles.
    pub move_count: u32,

    pub mode: GameMode,

    pub clock: GameClock,

    /// Used for recycle shuffles.
    pub rng: GameRng,
}

impl GameState {
    /// A fresh game over an already dealt layout.
    #[must_use]
    pub fn new(layout: Layout, mode: GameMode, rng: GameRng, now: Instant) -> Self {
        Self {
            layout,
            score: 0,
            move_count: 0,
            mode,
            clock: GameClock::started_at(now),
            rng,
        }
    }

    /// All four foundations complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.layout.is_complete()
    }

    /// Time played at `now`.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.clock.elapsed(now)
    }

    /// Time left in a timed game. `None` for untimed modes.
    #[must_use]
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        let limit = Duration::from_secs(self.mode.time_limit_secs()?);
        Some(limit.saturating_sub(self.elapsed(now)))
    }

    /// A timed game whose limit has run out.
    #[must_use]
    pub fn is_time_expired(&self, now: Instant) -> bool {
        self.time_remaining(now).is_some_and(|left| left.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(mode: GameMode, now: Instant) -> GameState {
        GameState::new(Layout::new(), mode, GameRng::new(1), now)
    }

    #[test]
    fn test_new_state_counters() {
        let s = state(GameMode::Normal, Instant::now());
        assert_eq!(s.score, 0);
        assert_eq!(s.move_count, 0);
        assert!(!s.is_won());
    }

    #[test]
    fn test_clock_elapsed() {
        let start = Instant::now();
        let clock = GameClock::started_at(start);
        assert_eq!(clock.elapsed(start + Duration::from_secs(90)), Duration::from_secs(90));
        assert_eq!(clock.elapsed(start), Duration::ZERO);
    }

    #[test]
    fn test_clock_resumed() {
        let now = Instant::now() + Duration::from_secs(1000);
        let clock = GameClock::resumed(now, Duration::from_secs(125)).unwrap();
        assert_eq!(clock.elapsed(now), Duration::from_secs(125));
    }

    #[test]
    fn test_untimed_never_expires() {
        let start = Instant::now();
        let s = state(GameMode::Normal, start);
        assert_eq!(s.time_remaining(start), None);
        assert!(!s.is_time_expired(start + Duration::from_secs(100_000)));
    }

    #[test]
    fn test_timed_expiry() {
        let start = Instant::now();
        let s = state(GameMode::Timed { limit_secs: 300 }, start);

        assert_eq!(
            s.time_remaining(start + Duration::from_secs(60)),
            Some(Duration::from_secs(240))
        );
        assert!(!s.is_time_expired(start + Duration::from_secs(299)));
        assert!(s.is_time_expired(start + Duration::from_secs(300)));
        assert_eq!(
            s.time_remaining(start + Duration::from_secs(400)),
            Some(Duration::ZERO)
        );
    }
}
