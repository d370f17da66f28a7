//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Draw the view currently held by the bridge.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let view = self.bridge.current();
        self.sync_session(&view);

        let ctx = ui::RenderContext {
            view: &view,
            session: &self.session,
            layout: &self.layout,
            edge_style: &self.edge_style,
        };

        ui::render(terminal, &ctx)
    }
}
