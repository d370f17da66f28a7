//! Input handling (keyboard and map highlight).

use anyhow::Result;
use client_frontend_core::{MapViewProps, ViewComponent, ViewState, views};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::input::KeyAction;

impl EventLoop {
    /// Drain pending keyboard input. Returns `true` when the UI should exit.
    pub(in crate::event) fn handle_input_tick(&mut self) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            // Repeats from held keys are not presses and fall through.
            if let TermEvent::Key(key) = term_event::read()?
                && key.kind == KeyEventKind::Press
                && self.handle_key_press(key)
            {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Handle key press and dispatch to the view on screen.
    pub(in crate::event) fn handle_key_press(&mut self, key: KeyEvent) -> bool {
        let view = self.bridge.current();
        let reachable = self.sync_session(&view);

        match self
            .input
            .handle_key(key, view.component, self.session.highlighted())
        {
            KeyAction::Quit => {
                tracing::info!("Quit requested from keyboard");
                true
            }
            KeyAction::Submit(action) => {
                match views::consume_action(&view.props) {
                    Some(consume_action) => consume_action.call(action),
                    None => tracing::warn!(?action, component = %view.component, "view has no action consumer"),
                }
                false
            }
            KeyAction::CycleTarget(step) => {
                self.session.cycle(&reachable, step);
                false
            }
            KeyAction::None => false,
        }
    }

    /// Align the transient session with `view` and return the nodes the map
    /// highlight may visit.
    pub(in crate::event) fn sync_session(&mut self, view: &ViewState) -> Vec<usize> {
        let reachable = match view.component {
            ViewComponent::GameMap => MapViewProps::from_props(&view.props)
                .map(|props| props.reachable())
                .unwrap_or_default(),
            _ => Vec::new(),
        };
        self.session.sync(self.bridge.generation(), &reachable);
        reachable
    }
}
