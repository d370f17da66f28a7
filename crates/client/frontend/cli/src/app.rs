//! Glue code tying the engine, the view bridge, and terminal UI together.
use std::rc::Rc;

use anyhow::{Context, Result};
use async_trait::async_trait;

use client_frontend_core::{
    BridgedPresenter, FileSaveStore, FrontendApp, FrontendConfig, Mailboxes, ViewBridge,
    ViewRegistry, views,
};
use game_core::{GameConfig, GameEngine};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

pub struct CliApp {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliApp {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    /// Wires every screen to its view, opens the save store and hands the
    /// resulting presenter to a fresh engine.
    pub(crate) fn build_event_loop(&self) -> Result<EventLoop> {
        let storage = &self.frontend_config.storage;

        let mut registry = ViewRegistry::new(Rc::new(ViewBridge::new()));
        views::register_all(&mut registry, &Mailboxes::new());

        let store = FileSaveStore::new(&storage.save_dir).with_context(|| {
            format!("failed to open save directory {}", storage.save_dir.display())
        })?;
        let presenter = BridgedPresenter::new(registry, store, storage.save_key.clone());

        let game_config = match self.cli_config.seed {
            Some(seed) => GameConfig::with_seed(seed),
            None => GameConfig::new(),
        };

        Ok(EventLoop::new(
            GameEngine::new(game_config),
            presenter,
            self.frontend_config.layout.clone(),
            &self.cli_config,
        ))
    }

    pub async fn execute(self) -> Result<()> {
        tracing::info!(
            save_dir = %self.frontend_config.storage.save_dir.display(),
            seed = ?self.cli_config.seed,
            "CLI client starting..."
        );

        let event_loop = self.build_event_loop()?;

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = event_loop.run(&mut terminal).await;

        terminal::restore()?;
        match &result {
            Ok(()) => tracing::info!("CLI client exiting"),
            Err(e) => tracing::error!("CLI client stopped: {:#}", e),
        }

        result
    }
}

#[async_trait(?Send)]
impl FrontendApp for CliApp {
    async fn run(self) -> Result<()> {
        self.execute().await
    }
}

#[cfg(test)]
mod tests {
    use client_frontend_core::{SaveStore, ScreenKind, StorageConfig};
    use game_core::TickOutcome;
    use strum::IntoEnumIterator;

    use super::*;

    fn app(save_dir: &std::path::Path) -> CliApp {
        let frontend_config = FrontendConfig {
            storage: StorageConfig {
                save_dir: save_dir.to_path_buf(),
                save_key: StorageConfig::DEFAULT_SAVE_KEY.to_owned(),
            },
            ..FrontendConfig::default()
        };
        let cli_config = CliConfig {
            seed: Some(3),
            ..CliConfig::default()
        };
        CliApp::new(frontend_config, cli_config)
    }

    #[test]
    fn every_screen_is_bound() {
        let dir = tempfile::tempdir().unwrap();
        let event_loop = app(dir.path()).build_event_loop().unwrap();

        let registry = event_loop.presenter.registry();
        assert!(ScreenKind::iter().all(|kind| registry.is_bound(kind)));
    }

    #[test]
    fn existing_save_enables_continue() {
        let dir = tempfile::tempdir().unwrap();
        FileSaveStore::new(dir.path())
            .unwrap()
            .write(StorageConfig::DEFAULT_SAVE_KEY, "{}")
            .unwrap();

        let mut event_loop = app(dir.path()).build_event_loop().unwrap();
        assert_eq!(event_loop.step().unwrap(), TickOutcome::Running);
        assert!(event_loop.engine.has_save_game());
    }
}
