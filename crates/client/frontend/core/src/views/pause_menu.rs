use std::rc::Rc;

use game_core::MenuAction;

use super::MenuProps;
use crate::bridge::{ViewBridge, ViewComponent};
use crate::mailbox::ActionMailbox;
use crate::registry::RenderFn;
use crate::screen::{RenderArgs, ScreenAction};

pub fn setup(mailbox: Rc<ActionMailbox<MenuAction>>) -> impl FnOnce(Rc<ViewBridge>) -> RenderFn {
    move |bridge: Rc<ViewBridge>| -> RenderFn {
        let consume_action = mailbox.consumer(ScreenAction::as_menu);
        Box::new(move |args: RenderArgs| {
            let RenderArgs::PauseMenu { position } = args else {
                return None;
            };

            let props = MenuProps {
                position,
                consume_action: consume_action.clone(),
            }
            .into_props();

            bridge
                .present(ViewComponent::PauseMenu, props, &mailbox)
                .map(ScreenAction::Menu)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_move_replaces_view_and_drops_stale_action() {
        let bridge = Rc::new(ViewBridge::new());
        let mailbox = Rc::new(ActionMailbox::new());
        let mut render = setup(Rc::clone(&mailbox))(Rc::clone(&bridge));

        render(RenderArgs::PauseMenu { position: 0 });
        mailbox.post(MenuAction::Confirm);

        assert_eq!(render(RenderArgs::PauseMenu { position: 1 }), None);
        assert_eq!(bridge.current().component, ViewComponent::PauseMenu);
        assert_eq!(
            MenuProps::from_props(&bridge.current().props).map(|p| p.position),
            Some(1)
        );
    }
}
