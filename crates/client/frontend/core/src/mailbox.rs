//! Single-slot action mailbox shared by a view and the presenter.

use std::cell::RefCell;
use std::rc::Rc;

use crate::props::Callable;
use crate::screen::ScreenAction;

/// Holds at most one pending action for a screen.
///
/// Posting while an action is pending overwrites it: only the latest player
/// intent per frame survives.
#[derive(Debug)]
pub struct ActionMailbox<A> {
    slot: RefCell<Option<A>>,
}

impl<A> Default for ActionMailbox<A> {
    fn default() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }
}

impl<A> ActionMailbox<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&self, action: A) {
        *self.slot.borrow_mut() = Some(action);
    }

    /// Removes and returns the pending action.
    pub fn take(&self) -> Option<A> {
        self.slot.borrow_mut().take()
    }

    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }

    pub fn is_empty(&self) -> bool {
        self.slot.borrow().is_none()
    }
}

impl<A: 'static> ActionMailbox<A> {
    /// Builds the `consume_action` callable handed to the view.
    ///
    /// Actions that `project` rejects belong to another screen family and are
    /// dropped with a warning.
    pub fn consumer(self: &Rc<Self>, project: fn(ScreenAction) -> Option<A>) -> Callable {
        let mailbox = Rc::clone(self);
        Callable::new(move |action| match project(action) {
            Some(action) => mailbox.post(action),
            None => tracing::warn!(?action, "dropping action posted to the wrong screen"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameMapAction, MenuAction};

    #[test]
    fn latest_post_wins() {
        let mailbox = ActionMailbox::new();
        mailbox.post(MenuAction::Next);
        mailbox.post(MenuAction::Confirm);
        assert_eq!(mailbox.take(), Some(MenuAction::Confirm));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn clear_discards_pending_action() {
        let mailbox = ActionMailbox::new();
        mailbox.post(MenuAction::Previous);
        assert!(!mailbox.is_empty());
        mailbox.clear();
        assert!(mailbox.is_empty());
    }

    #[test]
    fn consumer_posts_matching_family_only() {
        let mailbox = Rc::new(ActionMailbox::<MenuAction>::new());
        let consume = mailbox.consumer(ScreenAction::as_menu);

        consume.call(ScreenAction::Map(GameMapAction::PauseGame));
        assert!(mailbox.is_empty());

        consume.call(ScreenAction::Menu(MenuAction::Next));
        assert_eq!(mailbox.take(), Some(MenuAction::Next));
    }
}
