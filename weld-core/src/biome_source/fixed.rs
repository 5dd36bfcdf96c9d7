//! A biome source with a static biome list.

use weld_registry::Biome;
use weld_utils::ResourceKey;

use super::BiomeSource;

/// Biome source that can only ever place a fixed set of biomes.
/// Superflat dimensions and vanilla reference maps use this; it carries
/// neither a config nor a reload capability.
#[derive(Debug, Clone)]
pub struct FixedBiomeSource {
    biomes: Vec<ResourceKey<Biome>>,
}

impl FixedBiomeSource {
    /// A source placing exactly `biomes`.
    #[must_use]
    pub fn new(biomes: Vec<ResourceKey<Biome>>) -> Self {
        FixedBiomeSource { biomes }
    }
}

impl BiomeSource for FixedBiomeSource {
    fn possible_biomes(&self) -> Vec<ResourceKey<Biome>> {
        self.biomes.clone()
    }
}
