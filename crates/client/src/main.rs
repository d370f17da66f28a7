//! TCG game client binary.
//!
//! Main entry point for the TCG game client.
//!
//! # Architecture
//!
//! This binary is the composition root: it loads configuration, sets up
//! logging and hands control to the selected frontend, which owns the game
//! engine for the rest of the process.
//!
//! Views share state through `Rc`, so everything runs on a current-thread
//! runtime.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Reproducible map with verbose logs
//! TCG_SEED=7 RUST_LOG=debug cargo run -p tcg-client
//! ```

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliApp, CliConfig, FrontendConfig, logging};
    use client_frontend_core::FrontendApp;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the log file on drop
    let _log_guard = logging::setup_logging(&cli_config.logging.log_dir)?;

    tracing::info!("Starting TCG client");
    tracing::info!("Save directory: {}", frontend_config.storage.save_dir.display());
    tracing::info!("Save key: {:?}", frontend_config.storage.save_key);

    // 3. Build and run the frontend
    let app = CliApp::new(frontend_config, cli_config);
    app.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
