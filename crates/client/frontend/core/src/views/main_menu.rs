use std::rc::Rc;

use game_core::MenuAction;

use super::{CONSUME_ACTION, POSITION, consume_action, position};
use crate::bridge::{ViewBridge, ViewComponent};
use crate::mailbox::ActionMailbox;
use crate::props::{Callable, PropValue, Props};
use crate::registry::RenderFn;
use crate::screen::{RenderArgs, ScreenAction};

const HAS_SAVE_GAME: &str = "has_save_game";

#[derive(Clone, Debug, PartialEq)]
pub struct MainMenuProps {
    pub position: u8,
    pub has_save_game: bool,
    pub consume_action: Callable,
}

impl MainMenuProps {
    pub fn into_props(self) -> Props {
        crate::props! {
            POSITION => self.position,
            HAS_SAVE_GAME => self.has_save_game,
            CONSUME_ACTION => self.consume_action,
        }
    }

    pub fn from_props(props: &Props) -> Option<Self> {
        Some(Self {
            position: position(props)?,
            has_save_game: props.get(HAS_SAVE_GAME).and_then(PropValue::as_bool)?,
            consume_action: consume_action(props)?,
        })
    }
}

pub fn setup(mailbox: Rc<ActionMailbox<MenuAction>>) -> impl FnOnce(Rc<ViewBridge>) -> RenderFn {
    move |bridge: Rc<ViewBridge>| -> RenderFn {
        let consume_action = mailbox.consumer(ScreenAction::as_menu);
        Box::new(move |args: RenderArgs| {
            let RenderArgs::MainMenu {
                position,
                has_save_game,
            } = args
            else {
                return None;
            };

            let props = MainMenuProps {
                position,
                has_save_game,
                consume_action: consume_action.clone(),
            }
            .into_props();

            bridge
                .present(ViewComponent::MainMenu, props, &mailbox)
                .map(ScreenAction::Menu)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(render: &mut RenderFn, position: u8, has_save_game: bool) -> Option<ScreenAction> {
        render(RenderArgs::MainMenu {
            position,
            has_save_game,
        })
    }

    #[test]
    fn publishes_typed_props() {
        let bridge = Rc::new(ViewBridge::new());
        let mut render = setup(Rc::new(ActionMailbox::new()))(Rc::clone(&bridge));

        frame(&mut render, 1, true);

        let view = bridge.current();
        assert_eq!(view.component, ViewComponent::MainMenu);
        let props = MainMenuProps::from_props(&view.props).unwrap();
        assert_eq!(props.position, 1);
        assert!(props.has_save_game);
    }

    #[test]
    fn consume_action_is_stable_across_frames() {
        let bridge = Rc::new(ViewBridge::new());
        let mut render = setup(Rc::new(ActionMailbox::new()))(Rc::clone(&bridge));

        frame(&mut render, 0, false);
        let first = bridge.current();
        frame(&mut render, 0, false);

        assert!(Rc::ptr_eq(&first, &bridge.current()));
    }

    #[test]
    fn action_posted_through_props_reaches_next_render() {
        let bridge = Rc::new(ViewBridge::new());
        let mut render = setup(Rc::new(ActionMailbox::new()))(Rc::clone(&bridge));

        frame(&mut render, 0, false);
        let props = MainMenuProps::from_props(&bridge.current().props).unwrap();
        props
            .consume_action
            .call(ScreenAction::Menu(MenuAction::Confirm));

        assert_eq!(
            frame(&mut render, 0, false),
            Some(ScreenAction::Menu(MenuAction::Confirm))
        );
        assert_eq!(frame(&mut render, 0, false), None);
    }
}
