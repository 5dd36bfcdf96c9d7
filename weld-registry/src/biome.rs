//! Biome entries and the biome registry of the loaded world.

use rustc_hash::FxHashMap;
use weld_utils::{ResourceKey, TagKey};

/// A biome as this crate needs to see it. Climate values are kept for
/// display and debugging; generation data stays with the game.
#[derive(Debug, Clone, PartialEq)]
pub struct Biome {
    /// Average temperature on the vanilla scale.
    pub temperature: f32,
    /// Rainfall amount on the vanilla scale.
    pub downfall: f32,
}

impl Biome {
    /// A biome with the given climate values.
    #[must_use]
    pub const fn new(temperature: f32, downfall: f32) -> Self {
        Biome {
            temperature,
            downfall,
        }
    }
}

impl Default for Biome {
    fn default() -> Self {
        // plains climate
        Biome::new(0.8, 0.4)
    }
}

/// The biome registry of the currently loaded world, together with its
/// category-tag index.
///
/// Built once while the world loads and then only read. Iteration order
/// over entries and tag members is registration order.
#[derive(Debug, Default)]
pub struct BiomeRegistry {
    entries: Vec<(ResourceKey<Biome>, Biome)>,
    index: FxHashMap<ResourceKey<Biome>, usize>,
    tags: FxHashMap<TagKey<Biome>, Vec<ResourceKey<Biome>>>,
}

impl BiomeRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `biome` under `key`, returning the entry it replaced.
    pub fn register(&mut self, key: ResourceKey<Biome>, biome: Biome) -> Option<Biome> {
        if let Some(&slot) = self.index.get(&key) {
            let previous = std::mem::replace(&mut self.entries[slot].1, biome);
            return Some(previous);
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, biome));
        None
    }

    /// Adds `key` to the members of `tag`. Double binds are ignored.
    pub fn bind_tag(&mut self, tag: TagKey<Biome>, key: ResourceKey<Biome>) {
        let members = self.tags.entry(tag).or_default();
        if !members.contains(&key) {
            members.push(key);
        }
    }

    /// The biome registered under `key`.
    #[must_use]
    pub fn get(&self, key: &ResourceKey<Biome>) -> Option<&Biome> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Whether `key` names a registered biome.
    #[must_use]
    pub fn contains_key(&self, key: &ResourceKey<Biome>) -> bool {
        self.index.contains_key(key)
    }

    /// Every registered biome key, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &ResourceKey<Biome>> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// The members of `tag`, empty for a tag nothing was bound to.
    pub fn iter_tag(&self, tag: &TagKey<Biome>) -> impl Iterator<Item = &ResourceKey<Biome>> {
        self.tags.get(tag).into_iter().flatten()
    }

    /// Every tag at least one biome is bound to.
    pub fn tag_keys(&self) -> impl Iterator<Item = &TagKey<Biome>> {
        self.tags.keys()
    }

    /// Number of registered biomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no biomes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
