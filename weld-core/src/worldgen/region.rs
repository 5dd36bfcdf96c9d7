//! The optional region-provider capability.
//!
//! Some installations carry a third-party library that groups biomes
//! into named regions for blended placement. When it is present, the
//! repair pass imports its biomes into the classifier so they survive a
//! generator rebuild. Everything here is an interface; the adapter that
//! detects and wraps the concrete library lives with the integration
//! code, and absence of the library is always a silent no-op.

use weld_registry::{Biome, BiomeRegistry, BiomeType};
use weld_utils::ResourceKey;

/// Region groupings a provider can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionCategory {
    /// Overworld regions.
    Overworld,
    /// Nether regions.
    Nether,
}

/// The end landform slots a provider fills separately from its regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndLandform {
    /// Central highlands of the large islands.
    Highlands,
    /// Rings around the highlands.
    Midlands,
    /// Outer edges of the large islands.
    Edges,
    /// Small islands scattered between the large ones.
    Islands,
}

impl EndLandform {
    /// Every landform slot, in import order.
    pub const ALL: [EndLandform; 4] = [
        EndLandform::Highlands,
        EndLandform::Midlands,
        EndLandform::Edges,
        EndLandform::Islands,
    ];

    /// The biome type biomes of this landform are classified under.
    #[must_use]
    pub const fn biome_type(self) -> BiomeType {
        match self {
            EndLandform::Highlands | EndLandform::Midlands => BiomeType::EndLand,
            EndLandform::Edges => BiomeType::EndBarrens,
            EndLandform::Islands => BiomeType::EndVoid,
        }
    }
}

/// One region managed by the provider.
pub trait Region {
    /// Reports every biome this region can place into `found`.
    ///
    /// Implementations should skip entries they cannot resolve and keep
    /// enumerating; an error here aborts the import of the whole
    /// category, not just this region.
    fn collect_biomes(
        &self,
        biomes: &BiomeRegistry,
        found: &mut dyn FnMut(ResourceKey<Biome>),
    ) -> Result<(), anyhow::Error>;
}

/// The region-management library, probed once at startup and injected
/// only when present.
pub trait RegionProvider: Send + Sync {
    /// Every region registered under `category`.
    fn regions(&self, category: RegionCategory) -> Result<Vec<Box<dyn Region>>, anyhow::Error>;

    /// The biomes the provider places into one end landform slot.
    fn end_biomes(&self, landform: EndLandform) -> Result<Vec<ResourceKey<Biome>>, anyhow::Error>;
}
