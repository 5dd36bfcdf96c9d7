//! The end biome source.

use std::sync::Arc;

use weld_registry::{Biome, BiomeRegistry, BiomeType, BiomeTypeRegistry};
use weld_utils::ResourceKey;

use super::classified::ClassifiedSource;
use super::{
    BiomeSource, BiomeSourceConfig, ConfiguredBiomeSource, ReloadableBiomeSource,
};

// land first, then barrens, void and center; the snapshot keeps this
// grouping so the placement layers can slice it by landform
const END_TYPES: &[BiomeType] = &[
    BiomeType::EndLand,
    BiomeType::EndBarrens,
    BiomeType::EndVoid,
    BiomeType::EndCenter,
];

/// Biome source for the end: places every biome classified under one of
/// the end landform types that the loaded world actually registers.
pub struct EndBiomeSource {
    inner: ClassifiedSource,
}

impl EndBiomeSource {
    /// Builds the source and runs the initial discovery.
    #[must_use]
    pub fn new(
        biomes: Arc<BiomeRegistry>,
        classifier: Arc<BiomeTypeRegistry>,
        config: BiomeSourceConfig,
    ) -> Self {
        EndBiomeSource {
            inner: ClassifiedSource::new(biomes, classifier, END_TYPES, config),
        }
    }

    pub(crate) fn rebound(&self, biomes: Arc<BiomeRegistry>) -> Self {
        EndBiomeSource {
            inner: self.inner.rebound(biomes),
        }
    }
}

impl BiomeSource for EndBiomeSource {
    fn possible_biomes(&self) -> Vec<ResourceKey<Biome>> {
        self.inner.available()
    }

    fn as_configured(&self) -> Option<&dyn ConfiguredBiomeSource> {
        Some(self)
    }

    fn as_reloadable(&self) -> Option<&dyn ReloadableBiomeSource> {
        Some(self)
    }
}

impl ConfiguredBiomeSource for EndBiomeSource {
    fn config(&self) -> BiomeSourceConfig {
        self.inner.config()
    }

    fn set_config(&self, config: BiomeSourceConfig) {
        self.inner.set_config(config);
    }
}

impl ReloadableBiomeSource for EndBiomeSource {
    fn reload_biomes(&self) {
        self.inner.refresh();
    }
}
