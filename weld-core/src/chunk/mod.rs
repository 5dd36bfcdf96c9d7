//! Chunk generators at the configuration level.
//!
//! Nothing in here produces terrain. These types model what a save
//! stores about each dimension's generator, which is all the repair
//! pass needs to compare, rebuild and replace them.

pub mod chunk_generator;
pub mod flat_generator;
pub mod noise_generator;

pub use chunk_generator::{ChunkGenerator, EnforceError, EnforceableChunkGenerator, GeneratorKind};
pub use flat_generator::{FlatGenerator, FlatGeneratorSettings};
pub use noise_generator::{NoiseGenerator, NoiseGeneratorSettings, noise_settings};
