//! Biome category tags read by the world-load repair pass.
//!
//! The `is_end_*` landform tags follow the `c` convention namespace so
//! content packs can opt into a landform without touching vanilla tags.

use weld_utils::TagKey;

use crate::{BIOMES_REGISTRY, biome::Biome};

/// Biomes that generate in the nether.
pub const IS_NETHER: TagKey<Biome> = TagKey::vanilla(BIOMES_REGISTRY, "is_nether");
/// Biomes that generate anywhere in the end.
pub const IS_END: TagKey<Biome> = TagKey::vanilla(BIOMES_REGISTRY, "is_end");

/// End highland biomes.
pub const IS_END_HIGHLAND: TagKey<Biome> = TagKey::common(BIOMES_REGISTRY, "is_end_highland");
/// End midland biomes.
pub const IS_END_MIDLAND: TagKey<Biome> = TagKey::common(BIOMES_REGISTRY, "is_end_midland");
/// End barrens and island-edge biomes.
pub const IS_END_BARRENS: TagKey<Biome> = TagKey::common(BIOMES_REGISTRY, "is_end_barrens");
/// Small end island biomes.
pub const IS_SMALL_END_ISLAND: TagKey<Biome> =
    TagKey::common(BIOMES_REGISTRY, "is_small_end_island");
/// Biomes of the central end island.
pub const IS_END_CENTER: TagKey<Biome> = TagKey::common(BIOMES_REGISTRY, "is_end_center");
