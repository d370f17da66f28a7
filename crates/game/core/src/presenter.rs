//! The boundary between the engine and whatever draws the game.
//!
//! The engine pushes one render call per frame for the screen it is showing
//! and pulls back at most one player action. It never sees widgets, key codes
//! or storage backends.

use thiserror::Error;

use crate::map::{GameLevel, GameMapAction};
use crate::menu::{MainMenu, MenuAction, PauseMenu, SettingsMenu};

/// Failures surfaced by a presenter.
#[derive(Debug, Error)]
pub enum PresenterError {
    /// A render entry point was called before the UI bound a handler to it.
    #[error("entry point '{0}' has not been bound")]
    NotBound(&'static str),

    #[error("save storage error: {0}")]
    Storage(String),
}

pub type PresenterResult<T> = std::result::Result<T, PresenterError>;

/// Render entry points and save-game access offered to the engine.
///
/// Every `render_*` call returns the action the player queued for that screen
/// since the previous call, or `None`.
pub trait Presenter {
    fn render_main_menu(
        &mut self,
        position: MainMenu,
        has_save_game: bool,
    ) -> PresenterResult<Option<MenuAction>>;

    fn render_settings_menu(&mut self, position: SettingsMenu) -> PresenterResult<Option<MenuAction>>;

    fn render_pause_menu(&mut self, position: PauseMenu) -> PresenterResult<Option<MenuAction>>;

    fn render_game_map(&mut self, level: &GameLevel) -> PresenterResult<Option<GameMapAction>>;

    /// Tears the game view down. Called once when the run state reaches
    /// `Quitting`.
    fn quit_application(&mut self) -> PresenterResult<()>;

    /// Replaces the saved game with `data`.
    fn save_game(&mut self, data: &str) -> PresenterResult<()>;

    fn get_save_game(&mut self) -> PresenterResult<Option<String>>;

    fn delete_save_game(&mut self) -> PresenterResult<()>;
}
