//! The view bridge: the single on-screen view and its replacement rule.
//!
//! The engine pushes a component and its props on every frame. The bridge only
//! swaps the displayed view when the component changes or the props differ
//! structurally, so transient UI state attached to a view survives repeated
//! identical render calls.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use strum::Display;
use thiserror::Error;

use crate::mailbox::ActionMailbox;
use crate::props::{Props, records_are_same};

/// Identity of the component currently on screen.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display)]
pub enum ViewComponent {
    /// Nothing is running.
    #[default]
    Null,
    MainMenu,
    SettingsMenu,
    PauseMenu,
    GameMap,
}

/// Component plus props. Replaced wholesale, never edited in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub component: ViewComponent,
    pub props: Props,
}

impl ViewState {
    pub fn new(component: ViewComponent, props: Props) -> Self {
        Self { component, props }
    }

    pub fn null() -> Self {
        Self::default()
    }

    /// Whether showing `component` with `props` would change what is on screen.
    pub fn differs_from(&self, component: ViewComponent, props: &Props) -> bool {
        self.component != component || !records_are_same(&self.props, props)
    }
}

#[derive(Debug, Error)]
pub enum BridgeError {
    /// A render entry point was invoked before a setup function bound it.
    #[error("entry point '{0}' has not been bound")]
    NotBound(&'static str),
}

/// Owner of the displayed [`ViewState`].
///
/// The generation counter increases on every replacement; UI layers key their
/// transient state on it.
#[derive(Debug, Default)]
pub struct ViewBridge {
    state: RefCell<Rc<ViewState>>,
    generation: Cell<u64>,
}

impl ViewBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the view on screen.
    pub fn current(&self) -> Rc<ViewState> {
        Rc::clone(&self.state.borrow())
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Reactive display setter.
    ///
    /// `updater` sees the current view and returns its replacement, or `None`
    /// to keep it. Returns whether the view was replaced.
    pub fn set_view(&self, updater: impl FnOnce(&ViewState) -> Option<ViewState>) -> bool {
        let next = {
            let current = self.state.borrow();
            updater(&current)
        };

        let Some(next) = next else {
            return false;
        };

        tracing::debug!(
            component = %next.component,
            generation = self.generation.get() + 1,
            "replacing view"
        );
        *self.state.borrow_mut() = Rc::new(next);
        self.generation.set(self.generation.get() + 1);
        true
    }

    /// Shows `component` with `props` and collects the screen's pending action.
    ///
    /// A replacement discards whatever was queued for the previous view, so the
    /// returned action always belongs to the view that was already on screen.
    pub fn present<A>(
        &self,
        component: ViewComponent,
        props: Props,
        mailbox: &ActionMailbox<A>,
    ) -> Option<A> {
        let replaced = self.set_view(move |current| {
            current
                .differs_from(component, &props)
                .then(|| ViewState::new(component, props))
        });

        if replaced {
            mailbox.clear();
        }
        mailbox.take()
    }

    /// Shows the null view.
    pub fn clear(&self) {
        self.set_view(|current| (current.component != ViewComponent::Null).then(ViewState::null));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;
    use game_core::MenuAction;

    fn menu_props(position: u8) -> Props {
        props! { "position" => position }
    }

    #[test]
    fn starts_on_null_view() {
        let bridge = ViewBridge::new();
        assert_eq!(bridge.current().component, ViewComponent::Null);
        assert_eq!(bridge.generation(), 0);
    }

    #[test]
    fn equal_props_keep_the_view() {
        let bridge = ViewBridge::new();
        let mailbox = ActionMailbox::<MenuAction>::new();

        bridge.present(ViewComponent::MainMenu, menu_props(0), &mailbox);
        let shown = bridge.current();
        let generation = bridge.generation();

        bridge.present(ViewComponent::MainMenu, menu_props(0), &mailbox);
        assert!(Rc::ptr_eq(&shown, &bridge.current()));
        assert_eq!(bridge.generation(), generation);
    }

    #[test]
    fn changed_props_replace_the_view() {
        let bridge = ViewBridge::new();
        let mailbox = ActionMailbox::<MenuAction>::new();

        bridge.present(ViewComponent::MainMenu, menu_props(0), &mailbox);
        bridge.present(ViewComponent::MainMenu, menu_props(1), &mailbox);

        assert_eq!(bridge.generation(), 2);
        assert_eq!(
            bridge.current().props.get("position").and_then(|p| p.as_index()),
            Some(1)
        );
    }

    #[test]
    fn component_change_replaces_even_with_equal_props() {
        let bridge = ViewBridge::new();
        let mailbox = ActionMailbox::<MenuAction>::new();

        bridge.present(ViewComponent::SettingsMenu, menu_props(0), &mailbox);
        bridge.present(ViewComponent::PauseMenu, menu_props(0), &mailbox);

        assert_eq!(bridge.current().component, ViewComponent::PauseMenu);
        assert_eq!(bridge.generation(), 2);
    }

    #[test]
    fn pending_action_is_delivered_once() {
        let bridge = ViewBridge::new();
        let mailbox = ActionMailbox::new();

        bridge.present(ViewComponent::MainMenu, menu_props(0), &mailbox);
        mailbox.post(MenuAction::Next);

        assert_eq!(
            bridge.present(ViewComponent::MainMenu, menu_props(0), &mailbox),
            Some(MenuAction::Next)
        );
        assert_eq!(
            bridge.present(ViewComponent::MainMenu, menu_props(0), &mailbox),
            None
        );
    }

    #[test]
    fn replacement_discards_pending_action() {
        let bridge = ViewBridge::new();
        let mailbox = ActionMailbox::new();

        bridge.present(ViewComponent::MainMenu, menu_props(0), &mailbox);
        mailbox.post(MenuAction::Confirm);

        assert_eq!(
            bridge.present(ViewComponent::MainMenu, menu_props(2), &mailbox),
            None
        );
        assert!(mailbox.is_empty());
    }

    #[test]
    fn clear_shows_null_view_once() {
        let bridge = ViewBridge::new();
        let mailbox = ActionMailbox::<MenuAction>::new();

        bridge.present(ViewComponent::GameMap, menu_props(0), &mailbox);
        bridge.clear();
        assert_eq!(bridge.current().component, ViewComponent::Null);
        let generation = bridge.generation();

        bridge.clear();
        assert_eq!(bridge.generation(), generation);
    }
}
