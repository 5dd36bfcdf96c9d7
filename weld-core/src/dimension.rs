//! Dimensions as the save stores them: level stems and their registry.

use std::sync::Arc;

use weld_registry::{BiomeType, DIMENSIONS_REGISTRY};
use weld_utils::ResourceKey;

use crate::chunk::GeneratorKind;

/// Marker for dimension type registry keys.
#[derive(Debug)]
pub struct DimensionType;

/// The dimension types the base game ships.
pub mod vanilla_dimension_types {
    use weld_registry::DIMENSION_TYPE_REGISTRY;
    use weld_utils::ResourceKey;

    use super::DimensionType;

    /// Overworld dimension type.
    pub const OVERWORLD: ResourceKey<DimensionType> =
        ResourceKey::vanilla(DIMENSION_TYPE_REGISTRY, "overworld");
    /// Nether dimension type.
    pub const NETHER: ResourceKey<DimensionType> =
        ResourceKey::vanilla(DIMENSION_TYPE_REGISTRY, "the_nether");
    /// End dimension type.
    pub const END: ResourceKey<DimensionType> =
        ResourceKey::vanilla(DIMENSION_TYPE_REGISTRY, "the_end");
}

/// The overworld dimension.
pub const OVERWORLD: ResourceKey<LevelStem> = ResourceKey::vanilla(DIMENSIONS_REGISTRY, "overworld");
/// The nether dimension.
pub const NETHER: ResourceKey<LevelStem> = ResourceKey::vanilla(DIMENSIONS_REGISTRY, "the_nether");
/// The end dimension.
pub const END: ResourceKey<LevelStem> = ResourceKey::vanilla(DIMENSIONS_REGISTRY, "the_end");

/// One dimension as persisted in the save: its dimension type plus the
/// chunk generator it runs.
#[derive(Clone)]
pub struct LevelStem {
    /// The dimension type this stem generates under.
    pub dimension_type: ResourceKey<DimensionType>,
    /// The generator persisted for this dimension.
    pub generator: Arc<GeneratorKind>,
}

impl LevelStem {
    /// A stem running `generator` under `dimension_type`.
    #[must_use]
    pub fn new(dimension_type: ResourceKey<DimensionType>, generator: Arc<GeneratorKind>) -> Self {
        LevelStem {
            dimension_type,
            generator,
        }
    }
}

/// The dimension registry of a world save.
///
/// Treated as an immutable value end to end: a repair builds a new
/// registry and the caller continues with that one, the input is never
/// patched in place. Iteration order is insertion order, which for a
/// loaded save is the order the stems appear in the level data.
#[derive(Clone, Default)]
pub struct DimensionRegistry {
    entries: Vec<(ResourceKey<LevelStem>, LevelStem)>,
}

impl DimensionRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `stem` under `key`, returning the stem it replaced.
    pub fn insert(&mut self, key: ResourceKey<LevelStem>, stem: LevelStem) -> Option<LevelStem> {
        if let Some(slot) = self.entries.iter().position(|(entry_key, _)| *entry_key == key) {
            Some(std::mem::replace(&mut self.entries[slot].1, stem))
        } else {
            self.entries.push((key, stem));
            None
        }
    }

    /// The stem registered under `key`.
    #[must_use]
    pub fn get(&self, key: &ResourceKey<LevelStem>) -> Option<&LevelStem> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, stem)| stem)
    }

    /// Whether `key` names a registered dimension.
    #[must_use]
    pub fn contains_key(&self, key: &ResourceKey<LevelStem>) -> bool {
        self.get(key).is_some()
    }

    /// Every dimension with its stem, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ResourceKey<LevelStem>, &LevelStem)> {
        self.entries.iter().map(|(key, stem)| (key, stem))
    }

    /// Number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no dimensions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A copy of this registry with the stem under `key` replaced, or
    /// `None` if `key` is not registered. `self` stays untouched.
    #[must_use]
    pub fn with_replaced(
        &self,
        key: &ResourceKey<LevelStem>,
        stem: LevelStem,
    ) -> Option<DimensionRegistry> {
        let slot = self
            .entries
            .iter()
            .position(|(entry_key, _)| entry_key == key)?;

        let mut entries = self.entries.clone();
        entries[slot].1 = stem;
        Some(DimensionRegistry { entries })
    }
}

/// The biome type a dimension's stock biomes are imported under during
/// the vanilla import. Dimensions without one, the overworld included,
/// skip that import.
#[must_use]
pub fn main_biome_type(dimension: &ResourceKey<LevelStem>) -> Option<BiomeType> {
    if *dimension == NETHER {
        Some(BiomeType::Nether)
    } else if *dimension == END {
        Some(BiomeType::EndLand)
    } else {
        None
    }
}
