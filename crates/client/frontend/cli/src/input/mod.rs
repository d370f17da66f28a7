//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::{ScreenAction, ViewComponent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::{GameMapAction, MenuAction};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the UI loop immediately.
    Quit,
    /// Hand the action to the view on screen.
    Submit(ScreenAction),
    /// Move the map highlight through the reachable nodes.
    CycleTarget(isize),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into screen actions using a per-screen key map.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a command for `component`.
    ///
    /// `highlighted` is the map node under the cursor, if any.
    pub fn handle_key(
        &self,
        key: KeyEvent,
        component: ViewComponent,
        highlighted: Option<usize>,
    ) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match component {
            ViewComponent::MainMenu | ViewComponent::SettingsMenu | ViewComponent::PauseMenu => {
                self.menu(key.code)
            }
            ViewComponent::GameMap => self.map(key.code, highlighted),
            ViewComponent::Null => KeyAction::None,
        }
    }

    fn menu(&self, code: KeyCode) -> KeyAction {
        let action = match code {
            KeyCode::Up => MenuAction::Previous,
            KeyCode::Down => MenuAction::Next,
            KeyCode::Enter => MenuAction::Confirm,
            _ => return KeyAction::None,
        };
        KeyAction::Submit(ScreenAction::Menu(action))
    }

    fn map(&self, code: KeyCode, highlighted: Option<usize>) -> KeyAction {
        match code {
            KeyCode::Esc => KeyAction::Submit(ScreenAction::Map(GameMapAction::PauseGame)),
            KeyCode::Up | KeyCode::Left => KeyAction::CycleTarget(-1),
            KeyCode::Down | KeyCode::Right => KeyAction::CycleTarget(1),
            KeyCode::Enter => highlighted
                .map(|node| KeyAction::Submit(ScreenAction::Map(GameMapAction::GoToNode(node))))
                .unwrap_or(KeyAction::None),
            _ => KeyAction::None,
        }
    }
}
