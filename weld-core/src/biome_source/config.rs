//! The lightweight, persisted part of a biome source's configuration.

use serde::{Deserialize, Serialize};

/// How a source lays its biome cells out on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapVersion {
    /// Square-cell layout of older worlds.
    Square,
    /// Hex-cell layout, the current default.
    Hex,
}

/// Settings a biome source keeps inside the save.
///
/// Small enough to compare and overwrite as a value, which is exactly
/// what the soft-reconcile step of the repair pass does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeSourceConfig {
    /// Map layout the source places biome cells with.
    pub map_version: MapVersion,
    /// Edge length of one biome cell, in blocks.
    pub biome_size: u32,
    /// Whether biomes may stack vertically.
    pub vertical_biomes: bool,
}

impl Default for BiomeSourceConfig {
    fn default() -> Self {
        BiomeSourceConfig {
            map_version: MapVersion::Hex,
            biome_size: 256,
            vertical_biomes: false,
        }
    }
}
