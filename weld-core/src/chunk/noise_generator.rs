//! The noise-backed chunk generator and its enforcement behavior.

use std::sync::Arc;

use weld_registry::{NOISE_SETTINGS_REGISTRY, RegistryAccess};
use weld_utils::ResourceKey;

use crate::biome_source::{BiomeSource, BiomeSourceKind};
use crate::dimension::{DimensionRegistry, DimensionType, LevelStem};

use super::chunk_generator::{
    ChunkGenerator, EnforceError, EnforceableChunkGenerator, GeneratorKind,
};

/// Marker for noise generator settings registry keys.
#[derive(Debug)]
pub struct NoiseGeneratorSettings;

/// The noise settings the base game ships.
pub mod noise_settings {
    use weld_registry::NOISE_SETTINGS_REGISTRY;
    use weld_utils::ResourceKey;

    use super::NoiseGeneratorSettings;

    /// Overworld noise settings.
    pub const OVERWORLD: ResourceKey<NoiseGeneratorSettings> =
        ResourceKey::vanilla(NOISE_SETTINGS_REGISTRY, "overworld");
    /// Nether noise settings.
    pub const NETHER: ResourceKey<NoiseGeneratorSettings> =
        ResourceKey::vanilla(NOISE_SETTINGS_REGISTRY, "nether");
    /// End noise settings.
    pub const END: ResourceKey<NoiseGeneratorSettings> =
        ResourceKey::vanilla(NOISE_SETTINGS_REGISTRY, "end");
}

/// A noise-backed chunk generator, identified by its settings key, the
/// world seed and the biome source it places biomes with.
///
/// This is the generator the expected configuration is expressed in, so
/// it carries the enforcement capability.
pub struct NoiseGenerator {
    settings: ResourceKey<NoiseGeneratorSettings>,
    seed: u64,
    biome_source: BiomeSourceKind,
}

impl NoiseGenerator {
    /// A generator using `settings` with `biome_source`.
    #[must_use]
    pub fn new(
        settings: ResourceKey<NoiseGeneratorSettings>,
        seed: u64,
        biome_source: BiomeSourceKind,
    ) -> Self {
        NoiseGenerator {
            settings,
            seed,
            biome_source,
        }
    }

    /// The noise settings key this generator runs.
    #[must_use]
    pub const fn settings(&self) -> &ResourceKey<NoiseGeneratorSettings> {
        &self.settings
    }

    /// The world seed this generator was built with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl ChunkGenerator for NoiseGenerator {
    fn biome_source(&self) -> &BiomeSourceKind {
        &self.biome_source
    }

    fn as_enforceable(&self) -> Option<&dyn EnforceableChunkGenerator> {
        Some(self)
    }
}

impl EnforceableChunkGenerator for NoiseGenerator {
    fn should_repair(&self, loaded: &GeneratorKind) -> bool {
        let GeneratorKind::Noise(loaded) = loaded else {
            return true;
        };

        // the seed is the world's, never a reason to rebuild
        self.settings != loaded.settings || !self.biome_source.same_kind(&loaded.biome_source)
    }

    fn enforce(
        &self,
        registries: &RegistryAccess,
        dimension: &ResourceKey<LevelStem>,
        dimension_type: &ResourceKey<DimensionType>,
        loaded: &GeneratorKind,
        dimensions: DimensionRegistry,
    ) -> Result<DimensionRegistry, EnforceError> {
        // the loaded seed survives the repair
        let seed = match loaded {
            GeneratorKind::Noise(generator) => generator.seed,
            GeneratorKind::Flat(_) => self.seed,
        };

        let biome_source = self.biome_source.rebuilt(registries);
        if biome_source.possible_biomes().is_empty() {
            return Err(EnforceError::EmptyBiomeSource(dimension.clone()));
        }

        let replacement = GeneratorKind::Noise(NoiseGenerator::new(
            self.settings.clone(),
            seed,
            biome_source,
        ));
        let stem = LevelStem::new(dimension_type.clone(), Arc::new(replacement));

        dimensions
            .with_replaced(dimension, stem)
            .ok_or_else(|| EnforceError::MissingDimension(dimension.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome_source::{BiomeSourceConfig, FixedBiomeSource, NetherBiomeSource};
    use crate::chunk::flat_generator::{FlatGenerator, FlatGeneratorSettings};
    use crate::dimension::{self, vanilla_dimension_types};
    use weld_registry::{BIOMES_REGISTRY, Biome, BiomeRegistry, BiomeType, BiomeTypeRegistry};
    use weld_utils::ResourceLocation;

    fn biome_key(path: &'static str) -> ResourceKey<Biome> {
        ResourceKey::vanilla(BIOMES_REGISTRY, path)
    }

    fn nether_world() -> (RegistryAccess, Arc<BiomeTypeRegistry>) {
        let mut biomes = BiomeRegistry::new();
        biomes.register(biome_key("nether_wastes"), Biome::new(2.0, 0.0));
        biomes.register(biome_key("crimson_forest"), Biome::new(2.0, 0.0));

        let classifier = Arc::new(BiomeTypeRegistry::new());
        classifier.register_if_unknown(biome_key("nether_wastes"), BiomeType::Nether);
        classifier.register_if_unknown(biome_key("crimson_forest"), BiomeType::Nether);

        (RegistryAccess::new(Arc::new(biomes)), classifier)
    }

    fn nether_source(
        registries: &RegistryAccess,
        classifier: &Arc<BiomeTypeRegistry>,
    ) -> BiomeSourceKind {
        NetherBiomeSource::new(
            registries.biomes().clone(),
            classifier.clone(),
            BiomeSourceConfig::default(),
        )
        .into()
    }

    fn flat_generator() -> GeneratorKind {
        FlatGenerator::new(FlatGeneratorSettings {
            layers: vec![ResourceLocation::vanilla_static("netherrack")],
            biome: ResourceLocation::vanilla_static("nether_wastes"),
        })
        .into()
    }

    #[test]
    fn test_should_repair_on_kind_mismatch() {
        let (registries, classifier) = nether_world();
        let expected = NoiseGenerator::new(
            noise_settings::NETHER,
            1,
            nether_source(&registries, &classifier),
        );

        assert!(expected.should_repair(&flat_generator()));
    }

    #[test]
    fn test_should_repair_on_settings_or_source_kind_mismatch() {
        let (registries, classifier) = nether_world();
        let expected = NoiseGenerator::new(
            noise_settings::NETHER,
            1,
            nether_source(&registries, &classifier),
        );

        let wrong_settings = GeneratorKind::Noise(NoiseGenerator::new(
            noise_settings::END,
            1,
            nether_source(&registries, &classifier),
        ));
        assert!(expected.should_repair(&wrong_settings));

        let wrong_source = GeneratorKind::Noise(NoiseGenerator::new(
            noise_settings::NETHER,
            1,
            FixedBiomeSource::new(vec![biome_key("nether_wastes")]).into(),
        ));
        assert!(expected.should_repair(&wrong_source));
    }

    #[test]
    fn test_seed_and_config_differences_do_not_repair() {
        let (registries, classifier) = nether_world();
        let expected = NoiseGenerator::new(
            noise_settings::NETHER,
            1,
            nether_source(&registries, &classifier),
        );

        let mut drifted_config = BiomeSourceConfig::default();
        drifted_config.biome_size *= 2;
        let loaded = GeneratorKind::Noise(NoiseGenerator::new(
            noise_settings::NETHER,
            99,
            NetherBiomeSource::new(
                registries.biomes().clone(),
                classifier.clone(),
                drifted_config,
            )
            .into(),
        ));

        assert!(!expected.should_repair(&loaded));
    }

    #[test]
    fn test_enforce_rebuilds_around_loaded_seed() {
        let (registries, classifier) = nether_world();
        let expected = NoiseGenerator::new(
            noise_settings::NETHER,
            1,
            nether_source(&registries, &classifier),
        );

        let loaded = GeneratorKind::Noise(NoiseGenerator::new(
            noise_settings::OVERWORLD,
            42,
            nether_source(&registries, &classifier),
        ));
        let mut dimensions = DimensionRegistry::new();
        dimensions.insert(
            dimension::NETHER,
            LevelStem::new(vanilla_dimension_types::NETHER, Arc::new(flat_generator())),
        );

        let repaired = expected
            .enforce(
                &registries,
                &dimension::NETHER,
                &vanilla_dimension_types::NETHER,
                &loaded,
                dimensions,
            )
            .unwrap();

        let stem = repaired.get(&dimension::NETHER).unwrap();
        assert_eq!(stem.dimension_type, vanilla_dimension_types::NETHER);
        let GeneratorKind::Noise(generator) = stem.generator.as_ref() else {
            panic!("expected a noise generator");
        };
        assert_eq!(*generator.settings(), noise_settings::NETHER);
        assert_eq!(generator.seed(), 42);

        let mut placed = generator.biome_source().possible_biomes();
        placed.sort_unstable();
        assert_eq!(
            placed,
            vec![biome_key("crimson_forest"), biome_key("nether_wastes")]
        );
    }

    #[test]
    fn test_enforce_unknown_dimension_is_an_error() {
        let (registries, classifier) = nether_world();
        let expected = NoiseGenerator::new(
            noise_settings::NETHER,
            1,
            nether_source(&registries, &classifier),
        );

        let result = expected.enforce(
            &registries,
            &dimension::NETHER,
            &vanilla_dimension_types::NETHER,
            &flat_generator(),
            DimensionRegistry::new(),
        );
        assert!(matches!(result, Err(EnforceError::MissingDimension(_))));
    }

    #[test]
    fn test_enforce_refuses_an_empty_rebuilt_source() {
        let (registries, _) = nether_world();
        // classifier with nothing in it, so the rebuilt source comes up empty
        let empty_classifier = Arc::new(BiomeTypeRegistry::new());
        let expected = NoiseGenerator::new(
            noise_settings::NETHER,
            1,
            nether_source(&registries, &empty_classifier),
        );

        let mut dimensions = DimensionRegistry::new();
        dimensions.insert(
            dimension::NETHER,
            LevelStem::new(vanilla_dimension_types::NETHER, Arc::new(flat_generator())),
        );

        let result = expected.enforce(
            &registries,
            &dimension::NETHER,
            &vanilla_dimension_types::NETHER,
            &flat_generator(),
            dimensions,
        );
        assert!(matches!(result, Err(EnforceError::EmptyBiomeSource(_))));
    }
}
