//! The overworld biome source for custom overworld-like dimensions.

use std::sync::Arc;

use weld_registry::{Biome, BiomeRegistry, BiomeType, BiomeTypeRegistry};
use weld_utils::ResourceKey;

use super::classified::ClassifiedSource;
use super::{
    BiomeSource, BiomeSourceConfig, ConfiguredBiomeSource, ReloadableBiomeSource,
};

const OVERWORLD_TYPES: &[BiomeType] = &[BiomeType::Overworld];

/// Biome source placing everything classified as
/// [`BiomeType::Overworld`]. The stock overworld import never feeds this
/// type, so its entries come from explicit registration.
pub struct OverworldBiomeSource {
    inner: ClassifiedSource,
}

impl OverworldBiomeSource {
    /// Builds the source and runs the initial discovery.
    #[must_use]
    pub fn new(
        biomes: Arc<BiomeRegistry>,
        classifier: Arc<BiomeTypeRegistry>,
        config: BiomeSourceConfig,
    ) -> Self {
        OverworldBiomeSource {
            inner: ClassifiedSource::new(biomes, classifier, OVERWORLD_TYPES, config),
        }
    }

    pub(crate) fn rebound(&self, biomes: Arc<BiomeRegistry>) -> Self {
        OverworldBiomeSource {
            inner: self.inner.rebound(biomes),
        }
    }
}

impl BiomeSource for OverworldBiomeSource {
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

impl ConfiguredBiomeSource for OverworldBiomeSource {
    fn config(&self) -> BiomeSourceConfig {
        self.inner.config()
    }

    fn set_config(&self, config: BiomeSourceConfig) {
        self.inner.set_config(config);
    }
}

impl ReloadableBiomeSource for OverworldBiomeSource {
    fn reload_biomes(&self) {
        self.inner.refresh();
    }
}
