//! Top-level run state of the application.
//!
//! ```text
//! Initializing ──► ShowingMainMenu ──Play──────► StartingNewGame ──► PlayingGame
//!                    │   ▲  └──Continue──► LoadingSavedGame ─────────┘   │  ▲
//!                    │   │                                              Esc │
//!           Settings ▼   │ Back                                          ▼  │ Continue
//!                ShowingSettingsMenu                                  PausingGame
//!                    Quit ──► Quitting               SaveAndQuit ──► Initializing
//! ```

use rand::SeedableRng;
use rand_xoshiro::Xoroshiro128PlusPlus;
use serde::{Deserialize, Serialize};

use crate::map::GameLevel;
use crate::menu::{MainMenu, PauseMenu, SettingsMenu};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RunState {
    Initializing,
    ShowingMainMenu(MainMenu),
    StartingNewGame,
    LoadingSavedGame,
    ShowingSettingsMenu(SettingsMenu),
    Quitting,
    PlayingGame(GameState),
    PausingGame(GameState, PauseMenu),
}

impl RunState {
    /// Short name used in logs; the full state carries the whole level.
    pub const fn label(&self) -> &'static str {
        match self {
            RunState::Initializing => "initializing",
            RunState::ShowingMainMenu(_) => "main-menu",
            RunState::StartingNewGame => "starting-new-game",
            RunState::LoadingSavedGame => "loading-saved-game",
            RunState::ShowingSettingsMenu(_) => "settings-menu",
            RunState::Quitting => "quitting",
            RunState::PlayingGame(_) => "playing",
            RunState::PausingGame(_, _) => "paused",
        }
    }
}

/// Everything that survives a save/load cycle.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub rng: Xoroshiro128PlusPlus,
    pub level: GameLevel,
}

impl GameState {
    /// Starts a new run. A fixed seed reproduces the same map.
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => Xoroshiro128PlusPlus::seed_from_u64(seed),
            None => Xoroshiro128PlusPlus::from_entropy(),
        };
        let level = GameLevel::generate(&mut rng);
        Self { rng, level }
    }

    pub fn to_save(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_save(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}
