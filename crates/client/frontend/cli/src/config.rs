//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    /// Fixed seed for level generation. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TCG_FRAME_INTERVAL_MS` - Frame interval in milliseconds (default: 16, min: 1)
    /// - `TCG_LOG_DIR` - Directory for the log file (default: ./logs)
    /// - `TCG_SEED` - Deterministic map seed (default: unset)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("TCG_FRAME_INTERVAL_MS") {
            config.ui.frame_interval_ms = interval.max(1);
        }
        if let Some(dir) = read_env::<PathBuf>("TCG_LOG_DIR") {
            config.logging.log_dir = dir;
        }
        config.seed = read_env::<u64>("TCG_SEED");

        config
    }
}

/// UI timing configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Delay between frames; each frame drains input, ticks the engine and draws.
    pub frame_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
