//! Configuration for the atlas build
//!
//! An optional `atlas.toml` supplies the assets root, an explicit cell-size
//! override and the seasonal line-art switch. Every field has a default, so
//! an absent or empty file behaves like [`AtlasConfig::default`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("failed to parse atlas config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings consumed by [`crate::atlas::SpriteAtlas`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Root directory holding the sheet PNGs and the `dicts/` tint files
    pub assets_dir: PathBuf,
    /// Explicit cell size; inferred from the reference sheet when absent
    pub cell_size: Option<u32>,
    /// Load the `seasonal` line-art file variants instead of the standard ones
    pub seasonal_lineart: bool,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("sprites"),
            cell_size: None,
            seasonal_lineart: false,
        }
    }
}

impl AtlasConfig {
    /// Load configuration from a TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist. Parse errors still fail.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
