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
            let RenderArgs::SettingsMenu { position } = args else {
                return None;
            };

            let props = MenuProps {
                position,
                consume_action: consume_action.clone(),
            }
            .into_props();

            bridge
                .present(ViewComponent::SettingsMenu, props, &mailbox)
                .map(ScreenAction::Menu)
        })
    }
}
