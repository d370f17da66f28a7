//! [`Presenter`] backed by the view registry and a save store.

use game_core::{
    GameLevel, GameMapAction, MainMenu, MenuAction, PauseMenu, Presenter, PresenterError,
    PresenterResult, SettingsMenu,
};

use crate::bridge::BridgeError;
use crate::registry::ViewRegistry;
use crate::screen::{RenderArgs, ScreenAction};
use crate::storage::{SaveStore, StorageError};

/// Turns engine render calls into registry dispatches.
///
/// Owning the registry freezes the set of bound entry points: nothing can be
/// registered once the presenter exists.
pub struct BridgedPresenter {
    registry: ViewRegistry,
    store: Box<dyn SaveStore>,
    save_key: String,
}

impl BridgedPresenter {
    pub fn new(
        registry: ViewRegistry,
        store: impl SaveStore + 'static,
        save_key: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            store: Box::new(store),
            save_key: save_key.into(),
        }
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    fn dispatch(&mut self, args: RenderArgs) -> PresenterResult<Option<ScreenAction>> {
        self.registry.render(args).map_err(|err| match err {
            BridgeError::NotBound(name) => PresenterError::NotBound(name),
        })
    }

    fn menu_action(&mut self, args: RenderArgs) -> PresenterResult<Option<MenuAction>> {
        Ok(self.dispatch(args)?.and_then(|action| {
            let menu = action.as_menu();
            if menu.is_none() {
                tracing::warn!(?action, "menu screen returned a map action");
            }
            menu
        }))
    }
}

impl From<StorageError> for PresenterError {
    fn from(err: StorageError) -> Self {
        PresenterError::Storage(err.to_string())
    }
}

impl Presenter for BridgedPresenter {
    fn render_main_menu(
        &mut self,
        position: MainMenu,
        has_save_game: bool,
    ) -> PresenterResult<Option<MenuAction>> {
        self.menu_action(RenderArgs::MainMenu {
            position: position.position(),
            has_save_game,
        })
    }

    fn render_settings_menu(&mut self, position: SettingsMenu) -> PresenterResult<Option<MenuAction>> {
        self.menu_action(RenderArgs::SettingsMenu {
            position: position.position(),
        })
    }

    fn render_pause_menu(&mut self, position: PauseMenu) -> PresenterResult<Option<MenuAction>> {
        self.menu_action(RenderArgs::PauseMenu {
            position: position.position(),
        })
    }

    fn render_game_map(&mut self, level: &GameLevel) -> PresenterResult<Option<GameMapAction>> {
        let args = RenderArgs::GameMap {
            nodes: level.nodes.iter().map(|node| node.code()).collect(),
            edges: level.edge_list(),
            current: level.current,
            visited: level.visited.iter().copied().collect(),
        };

        Ok(self.dispatch(args)?.and_then(|action| {
            let map = action.as_map();
            if map.is_none() {
                tracing::warn!(?action, "map screen returned a menu action");
            }
            map
        }))
    }

    fn quit_application(&mut self) -> PresenterResult<()> {
        tracing::info!("game view closed");
        self.registry.bridge().clear();
        Ok(())
    }

    fn save_game(&mut self, data: &str) -> PresenterResult<()> {
        Ok(self.store.write(&self.save_key, data)?)
    }

    fn get_save_game(&mut self) -> PresenterResult<Option<String>> {
        Ok(self.store.read(&self.save_key)?)
    }

    fn delete_save_game(&mut self) -> PresenterResult<()> {
        Ok(self.store.delete(&self.save_key)?)
    }
}
