//! # Weld Registry
//!
//! Registry-layer types: the biome registry of the loaded world with its
//! category-tag index, the coarse biome taxonomy and its classifier, and
//! the item stacks the crafting helpers work on.

pub mod biome;
pub mod biome_type;
pub mod item_stack;
mod registry_access;
pub mod tags;

pub use biome::{Biome, BiomeRegistry};
pub use biome_type::{BiomeType, BiomeTypeRegistry};
pub use item_stack::ItemStack;
pub use registry_access::RegistryAccess;

use weld_utils::ResourceLocation;

/// Name of the biome registry.
pub const BIOMES_REGISTRY: ResourceLocation = ResourceLocation::vanilla_static("worldgen/biome");
/// Name of the dimension registry of a world save.
pub const DIMENSIONS_REGISTRY: ResourceLocation = ResourceLocation::vanilla_static("dimension");
/// Name of the dimension type registry.
pub const DIMENSION_TYPE_REGISTRY: ResourceLocation =
    ResourceLocation::vanilla_static("dimension_type");
/// Name of the noise generator settings registry.
pub const NOISE_SETTINGS_REGISTRY: ResourceLocation =
    ResourceLocation::vanilla_static("worldgen/noise_settings");
/// Name of the world preset registry.
pub const WORLD_PRESETS_REGISTRY: ResourceLocation =
    ResourceLocation::vanilla_static("worldgen/world_preset");
/// Name of the item registry.
pub const ITEMS_REGISTRY: ResourceLocation = ResourceLocation::vanilla_static("item");
