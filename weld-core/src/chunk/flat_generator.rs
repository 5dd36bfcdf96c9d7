//! The superflat chunk generator.

use serde::{Deserialize, Serialize};
use weld_registry::BIOMES_REGISTRY;
use weld_utils::{ResourceKey, ResourceLocation};

use crate::biome_source::{BiomeSourceKind, FixedBiomeSource};

use super::chunk_generator::ChunkGenerator;

/// Layer stack and fill biome of a superflat dimension, as stored in
/// the save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatGeneratorSettings {
    /// Block ids bottom-up, one entry per layer.
    pub layers: Vec<ResourceLocation>,
    /// The single biome the dimension is filled with.
    pub biome: ResourceLocation,
}

/// A superflat chunk generator. Plain save data with a fixed biome
/// source; it carries no repair capability.
pub struct FlatGenerator {
    settings: FlatGeneratorSettings,
    biome_source: BiomeSourceKind,
}

impl FlatGenerator {
    /// A generator filling the dimension per `settings`.
    #[must_use]
    pub fn new(settings: FlatGeneratorSettings) -> Self {
        let biome = ResourceKey::new(BIOMES_REGISTRY, settings.biome.clone());
        FlatGenerator {
            biome_source: FixedBiomeSource::new(vec![biome]).into(),
            settings,
        }
    }

    /// The persisted settings of this generator.
    #[must_use]
    pub const fn settings(&self) -> &FlatGeneratorSettings {
        &self.settings
    }
}

impl ChunkGenerator for FlatGenerator {
    fn biome_source(&self) -> &BiomeSourceKind {
        &self.biome_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome_source::BiomeSource;

    fn settings() -> FlatGeneratorSettings {
        FlatGeneratorSettings {
            layers: vec![
                ResourceLocation::vanilla_static("bedrock"),
                ResourceLocation::vanilla_static("dirt"),
                ResourceLocation::vanilla_static("grass_block"),
            ],
            biome: ResourceLocation::vanilla_static("plains"),
        }
    }

    #[test]
    fn test_biome_source_places_only_the_fill_biome() {
        let generator = FlatGenerator::new(settings());
        let placed = generator.biome_source().possible_biomes();
        assert_eq!(placed.len(), 1);
        assert_eq!(*placed[0].location(), settings().biome);
    }

    #[test]
    fn test_settings_round_trip_through_json() {
        let settings = settings();
        let json = serde_json::to_string(&settings).unwrap();
        let back: FlatGeneratorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
