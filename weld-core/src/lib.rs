//! # Weld Core
//!
//! World-load reconciliation for modded generation settings.
//!
//! When a world comes back up, the generators persisted in its save may
//! no longer match what the installed content expects: packs were added
//! or removed, settings changed, or another tool rewrote the level data.
//! The repair pass in [`worldgen::repair`] walks every dimension, feeds
//! the biome classifier, and reconciles each generator against the
//! expected configuration, from hard replacement down to a plain
//! biome-list reload.

pub mod biome_source;
pub mod chunk;
pub mod config;
pub mod dimension;
pub mod inventory;
pub mod worldgen;

pub use config::WeldConfig;
pub use worldgen::repair::{RepairContext, repair_biome_sources, repair_on_load};
