//! Biome sources at the configuration level: which biomes a dimension
//! can place, plus the optional capabilities the repair pass probes for.

mod classified;
mod config;
mod end;
mod fixed;
mod nether;
mod overworld;

pub use config::{BiomeSourceConfig, MapVersion};
pub use end::EndBiomeSource;
pub use fixed::FixedBiomeSource;
pub use nether::NetherBiomeSource;
pub use overworld::OverworldBiomeSource;

use std::mem;

use enum_dispatch::enum_dispatch;
use weld_registry::{Biome, RegistryAccess};
use weld_utils::ResourceKey;

/// A biome source as the repair pass sees it.
#[enum_dispatch]
pub trait BiomeSource: Send + Sync {
    /// Every biome this source can possibly place.
    fn possible_biomes(&self) -> Vec<ResourceKey<Biome>>;

    /// The nested-config capability, for sources that persist a
    /// [`BiomeSourceConfig`] inside the save.
    fn as_configured(&self) -> Option<&dyn ConfiguredBiomeSource> {
        None
    }

    /// The reload capability, for sources that can re-run their own
    /// biome discovery.
    fn as_reloadable(&self) -> Option<&dyn ReloadableBiomeSource> {
        None
    }
}

/// Sources that keep a lightweight config object inside the save.
pub trait ConfiguredBiomeSource: Send + Sync {
    /// The config as currently persisted.
    fn config(&self) -> BiomeSourceConfig;

    /// Overwrites the config. The source refreshes whatever state
    /// depends on it, so a separate reload is redundant afterwards.
    fn set_config(&self, config: BiomeSourceConfig);
}

/// Sources that can re-run their biome discovery in place.
pub trait ReloadableBiomeSource: Send + Sync {
    /// Drops the current available-biome snapshot and discovers again.
    fn reload_biomes(&self);
}

/// Every biome source kind the save data can hold.
#[allow(missing_docs)]
#[enum_dispatch(BiomeSource)]
pub enum BiomeSourceKind {
    Fixed(FixedBiomeSource),
    Overworld(OverworldBiomeSource),
    Nether(NetherBiomeSource),
    End(EndBiomeSource),
}

impl BiomeSourceKind {
    /// Whether `other` is the same kind of source, settings aside.
    #[must_use]
    pub fn same_kind(&self, other: &BiomeSourceKind) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// A fresh source of the same kind and config, bound to the given
    /// registries and rediscovered from scratch.
    #[must_use]
    pub fn rebuilt(&self, registries: &RegistryAccess) -> BiomeSourceKind {
        match self {
            BiomeSourceKind::Fixed(source) => BiomeSourceKind::Fixed(source.clone()),
            BiomeSourceKind::Overworld(source) => {
                BiomeSourceKind::Overworld(source.rebound(registries.biomes().clone()))
            }
            BiomeSourceKind::Nether(source) => {
                BiomeSourceKind::Nether(source.rebound(registries.biomes().clone()))
            }
            BiomeSourceKind::End(source) => {
                BiomeSourceKind::End(source.rebound(registries.biomes().clone()))
            }
        }
    }
}
