//! Library configuration, stored as JSON5 so hand-edited files can
//! keep their comments.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name the config is stored under, next to the game's own config.
pub const CONFIG_FILE: &str = "weld.json5";

/// Errors from reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file or its directory could not be read or written.
    #[error("failed to access the config file")]
    Io(#[from] io::Error),
    /// The file exists but does not parse as JSON5.
    #[error("failed to parse the config file")]
    Parse(#[from] serde_json5::Error),
    /// The default config could not be serialized for writing.
    #[error("failed to serialize the default config")]
    Write(#[from] serde_json::Error),
}

/// Toggles for the world-load repair pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeldConfig {
    /// Master switch for the repair pass. Off means worlds load exactly
    /// as their save data says, drifted or not.
    pub repair_biome_sources: bool,
    /// Whether region-provider biomes are imported when the provider
    /// library is present.
    pub import_region_biomes: bool,
}

impl Default for WeldConfig {
    fn default() -> Self {
        WeldConfig {
            repair_biome_sources: true,
            import_region_biomes: true,
        }
    }
}

impl WeldConfig {
    /// Reads the config from `path`, writing the defaults there first
    /// if no file exists yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let raw = fs::read_to_string(path)?;
            return Ok(serde_json5::from_str(&raw)?);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let config = Self::default();
        // plain JSON is valid JSON5, so the default file parses either way
        fs::write(path, serde_json::to_string_pretty(&config)?)?;
        Ok(config)
    }
}
