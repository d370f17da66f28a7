//! Frontend configuration structures and loaders.
//!
//! This module contains presentation settings that are shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub layout: LayoutConfig,
    pub storage: StorageConfig,
}

impl FrontendConfig {
    pub const fn new(layout: LayoutConfig, storage: StorageConfig) -> Self {
        Self { layout, storage }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TCG_LAYOUT_COLUMN_WIDTH` - Horizontal distance between graph layers (default: 100)
    /// - `TCG_LAYOUT_ROW_SPACING` - Vertical span per node of the widest layer (default: 100)
    /// - `TCG_LAYOUT_MARGIN` - Offset applied to both axes (default: 100)
    /// - `TCG_SAVE_DIR` - Directory holding the saved game (default: platform data dir)
    /// - `TCG_SAVE_KEY` - Key the saved game is stored under (default: "TCG Game")
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<f64>("TCG_LAYOUT_COLUMN_WIDTH").filter(|w| *w > 0.0) {
            config.layout.column_width = width;
        }
        if let Some(spacing) = read_env::<f64>("TCG_LAYOUT_ROW_SPACING").filter(|s| *s > 0.0) {
            config.layout.row_spacing = spacing;
        }
        if let Some(margin) = read_env::<f64>("TCG_LAYOUT_MARGIN").filter(|m| *m >= 0.0) {
            config.layout.margin = margin;
        }

        if let Some(dir) = read_env::<PathBuf>("TCG_SAVE_DIR") {
            config.storage.save_dir = dir;
        }
        if let Ok(key) = env::var("TCG_SAVE_KEY")
            && !key.trim().is_empty()
        {
            config.storage.save_key = key;
        }

        config
    }
}

/// Spacing used by the layered graph layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub column_width: f64,
    pub row_spacing: f64,
    pub margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: 100.0,
            row_spacing: 100.0,
            margin: 100.0,
        }
    }
}

/// Where the saved game lives.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub save_dir: PathBuf,
    pub save_key: String,
}

impl StorageConfig {
    pub const DEFAULT_SAVE_KEY: &'static str = "TCG Game";
}

impl Default for StorageConfig {
    fn default() -> Self {
        let save_dir = ProjectDirs::from("", "", "tcg")
            .map(|dirs| dirs.data_dir().join("saves"))
            .unwrap_or_else(|| PathBuf::from("saves"));

        Self {
            save_dir,
            save_key: Self::DEFAULT_SAVE_KEY.to_owned(),
        }
    }
}

pub(crate) fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
