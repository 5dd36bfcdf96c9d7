//! # Weld Utils
//!
//! Identifier types shared by every weld crate.

mod types;

pub use types::{ResourceKey, ResourceLocation, TagKey};
