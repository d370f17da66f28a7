//! Screen kinds and the shape of their render calls.

use game_core::{GameMapAction, MapEdge, MenuAction};
use strum::{Display, EnumIter};

/// Every screen the engine can push.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, EnumIter)]
pub enum ScreenKind {
    MainMenu,
    SettingsMenu,
    PauseMenu,
    GameMap,
}

impl ScreenKind {
    /// Name of the render entry point bound to this screen.
    pub const fn entry_point(self) -> &'static str {
        match self {
            ScreenKind::MainMenu => "render_main_menu",
            ScreenKind::SettingsMenu => "render_settings_menu",
            ScreenKind::PauseMenu => "render_pause_menu",
            ScreenKind::GameMap => "render_game_map",
        }
    }
}

/// Positional arguments of one render call.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderArgs {
    MainMenu {
        position: u8,
        has_save_game: bool,
    },
    SettingsMenu {
        position: u8,
    },
    PauseMenu {
        position: u8,
    },
    GameMap {
        nodes: Vec<u8>,
        edges: Vec<MapEdge>,
        current: usize,
        visited: Vec<usize>,
    },
}

impl RenderArgs {
    pub const fn kind(&self) -> ScreenKind {
        match self {
            RenderArgs::MainMenu { .. } => ScreenKind::MainMenu,
            RenderArgs::SettingsMenu { .. } => ScreenKind::SettingsMenu,
            RenderArgs::PauseMenu { .. } => ScreenKind::PauseMenu,
            RenderArgs::GameMap { .. } => ScreenKind::GameMap,
        }
    }
}

/// Player intent handed back to the engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScreenAction {
    Menu(MenuAction),
    Map(GameMapAction),
}

impl ScreenAction {
    pub const fn as_menu(self) -> Option<MenuAction> {
        match self {
            ScreenAction::Menu(action) => Some(action),
            ScreenAction::Map(_) => None,
        }
    }

    pub const fn as_map(self) -> Option<GameMapAction> {
        match self {
            ScreenAction::Map(action) => Some(action),
            ScreenAction::Menu(_) => None,
        }
    }
}
