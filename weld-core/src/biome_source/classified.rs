//! Shared body of the classifier-backed biome sources.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::RwLock;
use weld_registry::{Biome, BiomeRegistry, BiomeType, BiomeTypeRegistry};
use weld_utils::ResourceKey;

use super::BiomeSourceConfig;

/// What the nether, end and overworld sources have in common: a set of
/// biome types to place, discovery against the classifier, a swappable
/// available-biome snapshot and the persisted config.
pub(super) struct ClassifiedSource {
    biomes: Arc<BiomeRegistry>,
    classifier: Arc<BiomeTypeRegistry>,
    types: &'static [BiomeType],
    config: RwLock<BiomeSourceConfig>,
    // read-mostly snapshot, swapped whole on reload or config change
    available: ArcSwap<Vec<ResourceKey<Biome>>>,
}

impl ClassifiedSource {
    /// Builds the source and runs the initial discovery.
    pub(super) fn new(
        biomes: Arc<BiomeRegistry>,
        classifier: Arc<BiomeTypeRegistry>,
        types: &'static [BiomeType],
        config: BiomeSourceConfig,
    ) -> Self {
        let source = ClassifiedSource {
            biomes,
            classifier,
            types,
            config: RwLock::new(config),
            available: ArcSwap::from_pointee(Vec::new()),
        };
        source.refresh();
        source
    }

    /// A fresh source with the same classifier, types and config, bound
    /// to `biomes` and rediscovered from scratch.
    pub(super) fn rebound(&self, biomes: Arc<BiomeRegistry>) -> Self {
        ClassifiedSource::new(biomes, self.classifier.clone(), self.types, self.config())
    }

    // classifier entries for biomes the world never registered are
    // dropped here, not at classification time
    fn discover(&self) -> Vec<ResourceKey<Biome>> {
        self.types
            .iter()
            .flat_map(|biome_type| self.classifier.biomes_of(*biome_type))
            .filter(|key| self.biomes.contains_key(key))
            .collect()
    }

    /// Rebuilds the available-biome snapshot from the classifier.
    pub(super) fn refresh(&self) {
        self.available.store(Arc::new(self.discover()));
    }

    /// The current available-biome snapshot.
    pub(super) fn available(&self) -> Vec<ResourceKey<Biome>> {
        self.available.load().as_ref().clone()
    }

    pub(super) fn config(&self) -> BiomeSourceConfig {
        *self.config.read()
    }

    pub(super) fn set_config(&self, config: BiomeSourceConfig) {
        *self.config.write() = config;
        self.refresh();
    }
}
