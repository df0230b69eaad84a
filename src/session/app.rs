//! Menu state machine and player preferences.
//!
//! The front end runs a loop: read input, turn it into a `MenuCommand`,
//! call `App::handle`, draw whatever `Screen` comes back. In-game commands
//! go straight to the `GameSession` from `App::session_mut`.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::game::GameSession;
use crate::core::config::GameMode;
use crate::core::error::SnapshotError;
use crate::core::rng::GameRng;
use crate::rules::Klondike;

/// Card colour scheme. Purely cosmetic; the rules never look at it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    /// Red and black suits.
    #[default]
    #[serde(rename = "classico")]
    Classic,
    #[serde(rename = "blu_verde")]
    BlueGreen,
    #[serde(rename = "chiaro")]
    Light,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Classic, Theme::BlueGreen, Theme::Light];

    /// Name stored in save files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Theme::Classic => "classico",
            Theme::BlueGreen => "blu_verde",
            Theme::Light => "chiaro",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Theme::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Classic => f.write_str("classic (red/black)"),
            Theme::BlueGreen => f.write_str("blue/green"),
            Theme::Light => f.write_str("light"),
        }
    }
}

/// Settings that outlive a single game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    /// The tutorial has been shown once already.
    #[serde(default)]
    pub tutorial_seen: bool,
}

/// Where the front end is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    MainMenu,
    InGame,
    Exited,
}

/// Input to the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    /// Deal a new game. `None` picks a random seed.
    NewGame { mode: GameMode, seed: Option<u64> },
    /// Resume a game from snapshot JSON.
    LoadGame(String),
    SetTheme(Theme),
    /// The front end has shown the tutorial.
    TutorialShown,
    /// Leave the current game for the main menu.
    ReturnToMenu,
    Exit,
}

/// Top-level application state.
#[derive(Clone, Debug, Default)]
pub struct App {
    screen: Screen,
    preferences: Preferences,
    engine: Klondike,
    session: Option<GameSession>,
}

impl App {
    #[must_use]
    pub fn new(engine: Klondike, preferences: Preferences) -> Self {
        Self {
            screen: Screen::MainMenu,
            preferences,
            engine,
            session: None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        self.session.as_mut()
    }

    /// Show the tutorial before the first game.
    #[must_use]
    pub fn needs_tutorial(&self) -> bool {
        self.screen == Screen::InGame && !self.preferences.tutorial_seen
    }

    /// Apply one command and return the screen to show next. A failed load
    /// leaves the app where it was.
    pub fn handle(&mut self, command: MenuCommand, now: Instant) -> Result<Screen, SnapshotError> {
        if self.screen == Screen::Exited {
            return Ok(Screen::Exited);
        }

        match command {
            MenuCommand::NewGame { mode, seed } => {
                let seed = seed.unwrap_or_else(|| GameRng::from_entropy().seed());
                let theme = self.preferences.theme;
                self.session = Some(GameSession::new(self.engine.clone(), seed, mode, theme, now));
                self.screen = Screen::InGame;
            }
            MenuCommand::LoadGame(text) => {
                let mut session = GameSession::new(
                    self.engine.clone(),
                    GameRng::from_entropy().seed(),
                    GameMode::Normal,
                    self.preferences.theme,
                    now,
                );
                session.load_snapshot_at(&text, now)?;
                self.session = Some(session);
                self.screen = Screen::InGame;
            }
            MenuCommand::SetTheme(theme) => {
                self.preferences.theme = theme;
                if let Some(session) = &mut self.session {
                    session.set_theme(theme);
                }
            }
            MenuCommand::TutorialShown => self.preferences.tutorial_seen = true,
            MenuCommand::ReturnToMenu => {
                self.session = None;
                self.screen = Screen::MainMenu;
            }
            MenuCommand::Exit => {
                info!(target: "klondike.session", "exit");
                self.session = None;
                self.screen = Screen::Exited;
            }
        }
        debug!(target: "klondike.session", screen = ?self.screen, "menu command handled");
        Ok(self.screen)
    }
}
