//! The nether biome source.

use std::sync::Arc;

use weld_registry::{Biome, BiomeRegistry, BiomeType, BiomeTypeRegistry};
use weld_utils::ResourceKey;

use super::classified::ClassifiedSource;
use super::{
    BiomeSource, BiomeSourceConfig, ConfiguredBiomeSource, ReloadableBiomeSource,
};

const NETHER_TYPES: &[BiomeType] = &[BiomeType::Nether];

/// Biome source for the nether: places every biome classified as
/// [`BiomeType::Nether`] that the loaded world actually registers.
pub struct NetherBiomeSource {
    inner: ClassifiedSource,
}

impl NetherBiomeSource {
    /// Builds the source and runs the initial discovery.
    #[must_use]
    pub fn new(
        biomes: Arc<BiomeRegistry>,
        classifier: Arc<BiomeTypeRegistry>,
        config: BiomeSourceConfig,
    ) -> Self {
        NetherBiomeSource {
            inner: ClassifiedSource::new(biomes, classifier, NETHER_TYPES, config),
        }
    }

    pub(crate) fn rebound(&self, biomes: Arc<BiomeRegistry>) -> Self {
        NetherBiomeSource {
            inner: self.inner.rebound(biomes),
        }
    }
}

impl BiomeSource for NetherBiomeSource {
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

impl ConfiguredBiomeSource for NetherBiomeSource {
    fn config(&self) -> BiomeSourceConfig {
        self.inner.config()
    }

    fn set_config(&self, config: BiomeSourceConfig) {
        self.inner.set_config(config);
    }
}

impl ReloadableBiomeSource for NetherBiomeSource {
    fn reload_biomes(&self) {
        self.inner.refresh();
    }
}
