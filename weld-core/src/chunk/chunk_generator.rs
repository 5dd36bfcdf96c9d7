//! The `ChunkGenerator` capability model the repair pass works against.

use enum_dispatch::enum_dispatch;
use thiserror::Error;
use weld_registry::RegistryAccess;
use weld_utils::ResourceKey;

use crate::biome_source::BiomeSourceKind;
use crate::dimension::{DimensionRegistry, DimensionType, LevelStem};

use super::flat_generator::FlatGenerator;
use super::noise_generator::NoiseGenerator;

/// Errors the enforcement protocol can raise while rebuilding a
/// dimension.
#[derive(Debug, Error)]
pub enum EnforceError {
    /// The dimension to rebuild is not part of the registry under repair.
    #[error("dimension {0} is not part of the dimension registry")]
    MissingDimension(ResourceKey<LevelStem>),
    /// The rebuilt biome source would not be able to place any biome.
    #[error("rebuilt biome source for {0} has no biomes")]
    EmptyBiomeSource(ResourceKey<LevelStem>),
}

/// A chunk generator as the repair pass sees it: a biome source plus
/// optional repair capabilities. Terrain output stays with the game.
#[enum_dispatch]
pub trait ChunkGenerator: Send + Sync {
    /// The biome source this generator places biomes with.
    fn biome_source(&self) -> &BiomeSourceKind;

    /// The enforcement capability, for generators that can repair a
    /// drifted dimension around their own settings.
    fn as_enforceable(&self) -> Option<&dyn EnforceableChunkGenerator> {
        None
    }
}

/// Generators that know what a dimension is supposed to run and can
/// force that configuration into a dimension registry.
pub trait EnforceableChunkGenerator: Send + Sync {
    /// Whether `loaded` differs from this generator enough that the
    /// dimension has to be rebuilt around this generator's settings.
    fn should_repair(&self, loaded: &GeneratorKind) -> bool;

    /// Builds a replacement stem for `dimension` from this generator's
    /// settings and returns the registry containing it. The input
    /// registry is consumed; on success the caller must continue with
    /// the returned one.
    fn enforce(
        &self,
        registries: &RegistryAccess,
        dimension: &ResourceKey<LevelStem>,
        dimension_type: &ResourceKey<DimensionType>,
        loaded: &GeneratorKind,
        dimensions: DimensionRegistry,
    ) -> Result<DimensionRegistry, EnforceError>;
}

/// Every chunk generator kind the save data can hold.
#[enum_dispatch(ChunkGenerator)]
pub enum GeneratorKind {
    /// Noise-backed generator carrying the expected settings.
    Noise(NoiseGenerator),
    /// Superflat generator with a static layer stack.
    Flat(FlatGenerator),
}
