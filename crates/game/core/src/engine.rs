//! Frame-driven run-state machine.
//!
//! The [`GameEngine`] is the authoritative owner of [`RunState`]. Each call to
//! [`GameEngine::tick`] pushes exactly one screen to the [`Presenter`], consumes
//! the action (if any) the player queued for it, and moves to the next state.

use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::error::Result;
use crate::map::GameMapAction;
use crate::menu::{MainMenu, MenuOutcome};
use crate::presenter::Presenter;
use crate::run_state::{GameState, RunState};

/// Whether the frame loop should keep going after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Quit,
}

pub struct GameEngine {
    config: GameConfig,
    state: RunState,
    /// Saved game as last read from the presenter during `Initializing`.
    save_game: Option<String>,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: RunState::Initializing,
            save_game: None,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn has_save_game(&self) -> bool {
        self.save_game.is_some()
    }

    /// Runs one frame.
    ///
    /// Presenter failures abort the frame and leave the current state
    /// untouched; callers are expected to stop the loop.
    pub fn tick<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> Result<TickOutcome> {
        if self.state == RunState::Quitting {
            return Ok(TickOutcome::Quit);
        }

        let next = self.advance(presenter)?;
        if next != self.state {
            debug!(from = self.state.label(), to = next.label(), "run state changed");
        }
        self.state = next;

        if self.state == RunState::Quitting {
            presenter.quit_application()?;
            return Ok(TickOutcome::Quit);
        }

        Ok(TickOutcome::Running)
    }

    fn advance<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> Result<RunState> {
        let next = match self.state.clone() {
            RunState::Initializing => {
                self.save_game = presenter.get_save_game()?;
                RunState::ShowingMainMenu(MainMenu::default())
            }

            RunState::ShowingMainMenu(menu) => {
                let has_save_game = self.save_game.is_some();
                match presenter.render_main_menu(menu, has_save_game)? {
                    Some(action) => match menu.on_action(action, has_save_game) {
                        MenuOutcome::Stay(menu) => RunState::ShowingMainMenu(menu),
                        MenuOutcome::StartNewGame => RunState::StartingNewGame,
                        MenuOutcome::LoadSavedGame => RunState::LoadingSavedGame,
                        MenuOutcome::OpenSettings => RunState::ShowingSettingsMenu(Default::default()),
                        MenuOutcome::Quit => RunState::Quitting,
                        _ => RunState::ShowingMainMenu(menu),
                    },
                    None => RunState::ShowingMainMenu(menu),
                }
            }

            RunState::ShowingSettingsMenu(menu) => match presenter.render_settings_menu(menu)? {
                Some(action) => match menu.on_action(action) {
                    MenuOutcome::Stay(menu) => RunState::ShowingSettingsMenu(menu),
                    MenuOutcome::BackToMainMenu => RunState::ShowingMainMenu(MainMenu::Settings),
                    _ => RunState::ShowingSettingsMenu(menu),
                },
                None => RunState::ShowingSettingsMenu(menu),
            },

            RunState::StartingNewGame => RunState::PlayingGame(GameState::new(self.config.seed)),

            RunState::LoadingSavedGame => self.load_saved_game(presenter)?,

            RunState::PlayingGame(mut game) => match presenter.render_game_map(&game.level)? {
                Some(GameMapAction::PauseGame) => RunState::PausingGame(game, Default::default()),
                Some(GameMapAction::GoToNode(node)) => {
                    if !game.level.travel_to(node) {
                        debug!(from = game.level.current, to = node, "ignoring move without an edge");
                    }
                    RunState::PlayingGame(game)
                }
                None => RunState::PlayingGame(game),
            },

            RunState::PausingGame(game, menu) => match presenter.render_pause_menu(menu)? {
                Some(action) => match menu.on_action(action) {
                    MenuOutcome::Stay(menu) => RunState::PausingGame(game, menu),
                    MenuOutcome::ResumeGame => RunState::PlayingGame(game),
                    MenuOutcome::SaveAndQuit => {
                        presenter.save_game(&game.to_save()?)?;
                        RunState::Initializing
                    }
                    _ => RunState::PausingGame(game, menu),
                },
                None => RunState::PausingGame(game, menu),
            },

            RunState::Quitting => RunState::Quitting,
        };

        Ok(next)
    }

    fn load_saved_game<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> Result<RunState> {
        let Some(data) = self.save_game.as_deref() else {
            return Ok(RunState::Initializing);
        };

        match GameState::from_save(data) {
            Ok(game) => Ok(RunState::PlayingGame(game)),
            Err(e) => {
                warn!("discarding unreadable saved game: {}", e);
                presenter.delete_save_game()?;
                self.save_game = None;
                Ok(RunState::Initializing)
            }
        }
    }
}
