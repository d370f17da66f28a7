//! Game logic for the TCG client.
//!
//! `game-core` owns the run-state machine, the menus and the level map. It
//! never draws anything: every frame it pushes the current screen to a
//! [`Presenter`] and pulls back at most one player action. All state mutation
//! flows through [`engine::GameEngine`].
pub mod config;
pub mod engine;
pub mod error;
pub mod map;
pub mod menu;
pub mod presenter;
pub mod run_state;

pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use error::{EngineError, Result};
pub use map::{GameLevel, GameMapAction, MapEdge, MapNode};
pub use menu::{MainMenu, MenuAction, MenuOutcome, PauseMenu, SettingsMenu};
pub use presenter::{Presenter, PresenterError, PresenterResult};
pub use run_state::{GameState, RunState};
