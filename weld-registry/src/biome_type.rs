//! The coarse biome taxonomy and the classifier that assigns it.

use scc::HashMap;
use weld_utils::ResourceKey;

use crate::biome::Biome;

/// Coarse classification of where a biome belongs.
///
/// The end is split by landform because its biome sources place land,
/// barrens, void and center biomes through different layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiomeType {
    /// Overworld surface biomes.
    Overworld,
    /// Nether biomes.
    Nether,
    /// End highland and midland biomes.
    EndLand,
    /// End barrens and island-edge biomes.
    EndBarrens,
    /// Small island biomes and the void between them.
    EndVoid,
    /// Biomes of the central end island.
    EndCenter,
}

impl BiomeType {
    /// Whether this type belongs to the end dimension.
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(
            self,
            BiomeType::EndLand | BiomeType::EndBarrens | BiomeType::EndVoid | BiomeType::EndCenter
        )
    }

    /// Whether this type belongs to the nether.
    #[must_use]
    pub const fn is_nether(self) -> bool {
        matches!(self, BiomeType::Nether)
    }
}

/// Concurrent first-writer-wins map from biome identity to [`BiomeType`].
///
/// A classification is permanent for the lifetime of the registry: once a
/// key is known, later registrations for it are ignored no matter which
/// type they carry. Lookups never block registrations.
#[derive(Default)]
pub struct BiomeTypeRegistry {
    types: HashMap<ResourceKey<Biome>, BiomeType>,
}

impl BiomeTypeRegistry {
    /// An empty classifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `biome_type` for `key` unless the key is already known.
    /// Returns whether this call was the one that classified the key.
    pub fn register_if_unknown(&self, key: ResourceKey<Biome>, biome_type: BiomeType) -> bool {
        self.types.insert_sync(key, biome_type).is_ok()
    }

    /// The type `key` was classified under, if any.
    #[must_use]
    pub fn get(&self, key: &ResourceKey<Biome>) -> Option<BiomeType> {
        self.types.read_sync(key, |_, biome_type| *biome_type)
    }

    /// Whether `key` has been classified.
    #[must_use]
    pub fn is_known(&self, key: &ResourceKey<Biome>) -> bool {
        self.get(key).is_some()
    }

    /// Every key classified as `biome_type`, sorted for determinism.
    #[must_use]
    pub fn biomes_of(&self, biome_type: BiomeType) -> Vec<ResourceKey<Biome>> {
        let mut found = Vec::new();
        self.types.iter_sync(|key, entry| {
            if *entry == biome_type {
                found.push(key.clone());
            }
            true
        });
        found.sort_unstable();
        found
    }

    /// Number of classified biomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether nothing has been classified yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
