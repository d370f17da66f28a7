//! Frame loop orchestrating user input, the engine and rendering.
//!
//! Every frame runs three steps in order:
//! - drain keyboard input into the mailbox of the view on screen
//! - tick the engine, which renders through the bridge and collects the action
//! - draw whatever view the bridge now holds

use std::rc::Rc;

use anyhow::Result;
use client_frontend_core::{BridgedPresenter, EdgeStyle, LayoutConfig, ViewBridge};
use game_core::{GameEngine, TickOutcome};
use tokio::time::{self, Duration};

use crate::{input::InputHandler, presentation::terminal::Tui, state::ViewSession};

/// Owns the engine and its presenter and drives both on a fixed interval.
pub struct EventLoop {
    pub(crate) engine: GameEngine,
    pub(crate) presenter: BridgedPresenter,
    pub(crate) bridge: Rc<ViewBridge>,
    pub(crate) input: InputHandler,
    pub(crate) session: ViewSession,
    pub(crate) layout: LayoutConfig,
    pub(crate) edge_style: EdgeStyle,
    pub(crate) frame_interval: Duration,
}

impl EventLoop {
    pub fn new(
        engine: GameEngine,
        presenter: BridgedPresenter,
        layout: LayoutConfig,
        cli_config: &crate::config::CliConfig,
    ) -> Self {
        let bridge = Rc::clone(presenter.registry().bridge());

        Self {
            engine,
            presenter,
            bridge,
            input: InputHandler::new(),
            session: ViewSession::new(),
            layout,
            edge_style: EdgeStyle::default(),
            frame_interval: Duration::from_millis(cli_config.ui.frame_interval_ms),
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let mut frames = time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            frames.tick().await;

            if self.handle_input_tick()? {
                break;
            }
            if self.step()? == TickOutcome::Quit {
                break;
            }
            self.render(terminal)?;
        }

        Ok(())
    }

    /// Ticks the engine once. Engine failures, such as an unbound entry
    /// point, are fatal.
    pub(crate) fn step(&mut self) -> Result<TickOutcome> {
        Ok(self.engine.tick(&mut self.presenter)?)
    }
}
