//! Setup functions for every screen and the typed props they publish.
//!
//! Each setup runs once when it is registered. It creates the screen's
//! `consume_action` callable and returns the render function the registry
//! dispatches to on every frame.

pub mod game_map;
pub mod main_menu;
pub mod pause_menu;
pub mod settings_menu;

use std::rc::Rc;

use game_core::{GameMapAction, MenuAction};

pub use game_map::MapViewProps;
pub use main_menu::MainMenuProps;

use crate::mailbox::ActionMailbox;
use crate::props::{Callable, PropValue, Props};
use crate::registry::ViewRegistry;
use crate::screen::ScreenKind;

pub(crate) const POSITION: &str = "position";
pub(crate) const CONSUME_ACTION: &str = "consume_action";

/// One mailbox per screen kind, created at startup.
#[derive(Debug, Default)]
pub struct Mailboxes {
    pub main_menu: Rc<ActionMailbox<MenuAction>>,
    pub settings_menu: Rc<ActionMailbox<MenuAction>>,
    pub pause_menu: Rc<ActionMailbox<MenuAction>>,
    pub game_map: Rc<ActionMailbox<GameMapAction>>,
}

impl Mailboxes {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Binds every screen kind of `registry` to its setup function.
pub fn register_all(registry: &mut ViewRegistry, mailboxes: &Mailboxes) {
    registry.register(
        ScreenKind::MainMenu,
        main_menu::setup(Rc::clone(&mailboxes.main_menu)),
    );
    registry.register(
        ScreenKind::SettingsMenu,
        settings_menu::setup(Rc::clone(&mailboxes.settings_menu)),
    );
    registry.register(
        ScreenKind::PauseMenu,
        pause_menu::setup(Rc::clone(&mailboxes.pause_menu)),
    );
    registry.register(
        ScreenKind::GameMap,
        game_map::setup(Rc::clone(&mailboxes.game_map)),
    );
}

/// Props of the settings and pause menus.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuProps {
    pub position: u8,
    pub consume_action: Callable,
}

impl MenuProps {
    pub fn into_props(self) -> Props {
        crate::props! {
            POSITION => self.position,
            CONSUME_ACTION => self.consume_action,
        }
    }

    pub fn from_props(props: &Props) -> Option<Self> {
        Some(Self {
            position: position(props)?,
            consume_action: consume_action(props)?,
        })
    }
}

pub(crate) fn position(props: &Props) -> Option<u8> {
    props
        .get(POSITION)
        .and_then(PropValue::as_index)
        .and_then(|p| u8::try_from(p).ok())
}

/// The action consumer a view publishes, if any.
pub fn consume_action(props: &Props) -> Option<Callable> {
    props.get(CONSUME_ACTION).and_then(PropValue::as_callable).cloned()
}

pub(crate) fn indices(value: Option<&PropValue>) -> Option<Vec<usize>> {
    value?.as_sequence()?.iter().map(PropValue::as_index).collect()
}
