//! Shared read access to the registries of the loaded world.

use std::sync::Arc;

use crate::biome::BiomeRegistry;

/// Handle to the registry snapshot of the currently loaded world.
///
/// Cheap to clone; everything behind it is immutable once the world has
/// finished loading.
#[derive(Debug, Clone)]
pub struct RegistryAccess {
    biomes: Arc<BiomeRegistry>,
}

impl RegistryAccess {
    /// Wraps a finished biome registry.
    #[must_use]
    pub fn new(biomes: Arc<BiomeRegistry>) -> Self {
        RegistryAccess { biomes }
    }

    /// The biome registry of this snapshot.
    #[must_use]
    pub fn biomes(&self) -> &Arc<BiomeRegistry> {
        &self.biomes
    }
}
