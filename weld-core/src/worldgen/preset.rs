//! World presets: where reference dimension configurations come from.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use weld_registry::WORLD_PRESETS_REGISTRY;
use weld_utils::ResourceKey;

use crate::chunk::GeneratorKind;
use crate::dimension::LevelStem;

/// Marker for world preset registry keys.
#[derive(Debug)]
pub struct WorldPreset;

/// The unmodified default world preset.
pub const NORMAL: ResourceKey<WorldPreset> = ResourceKey::vanilla(WORLD_PRESETS_REGISTRY, "normal");

/// Per-dimension generators of one preset, or of a loaded world.
pub type DimensionMap = FxHashMap<ResourceKey<LevelStem>, Arc<GeneratorKind>>;

/// Where the repair pass gets dimension configurations from.
///
/// The bootstrap subsystem that assembles world presets implements this;
/// the repair pass only ever consumes it.
pub trait WorldPresetSource: Send + Sync {
    /// The generators this world is expected to run with, per dimension.
    /// Dimensions missing from the map are left alone by the repair.
    fn expected_dimensions(&self) -> DimensionMap;

    /// The generators `preset` declares, or `None` if the preset is
    /// unknown to this source.
    fn preset_dimensions(&self, preset: &ResourceKey<WorldPreset>) -> Option<DimensionMap>;
}
