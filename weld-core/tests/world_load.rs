//! Loads a three-dimension world with a drifted nether, a mis-configured
//! end and an untouched overworld, then checks each one came out of the
//! repair pass on the right path.

use std::sync::Arc;

use weld_core::WeldConfig;
use weld_core::biome_source::{
    BiomeSource, BiomeSourceConfig, BiomeSourceKind, EndBiomeSource, MapVersion,
    NetherBiomeSource, OverworldBiomeSource,
};
use weld_core::chunk::{
    ChunkGenerator, FlatGenerator, FlatGeneratorSettings, GeneratorKind, NoiseGenerator,
    noise_settings,
};
use weld_core::dimension::{self, DimensionRegistry, LevelStem, vanilla_dimension_types};
use weld_core::worldgen::preset::{self, DimensionMap, WorldPresetSource};
use weld_core::worldgen::region::{EndLandform, Region, RegionCategory, RegionProvider};
use weld_core::{RepairContext, repair_on_load};
use weld_registry::{
    BIOMES_REGISTRY, Biome, BiomeRegistry, BiomeType, BiomeTypeRegistry, RegistryAccess, tags,
};
use weld_utils::{ResourceKey, ResourceLocation};

fn biome_key(path: &'static str) -> ResourceKey<Biome> {
    ResourceKey::vanilla(BIOMES_REGISTRY, path)
}

fn modded_key(id: &str) -> ResourceKey<Biome> {
    ResourceKey::new(BIOMES_REGISTRY, id.parse().unwrap())
}

/// The world's biome registry: stock biomes with their category tags, an
/// untagged overworld biome and a pack-provided nether biome no tag
/// covers.
fn world_biomes() -> Arc<BiomeRegistry> {
    let mut biomes = BiomeRegistry::new();
    for path in [
        "plains",
        "meadow",
        "nether_wastes",
        "end_highlands",
        "end_barrens",
        "small_end_islands",
        "the_end",
    ] {
        biomes.register(biome_key(path), Biome::default());
    }
    biomes.register(modded_key("ashen:ashen_wastes"), Biome::new(2.0, 0.0));

    biomes.bind_tag(tags::IS_NETHER, biome_key("nether_wastes"));
    for path in ["end_highlands", "end_barrens", "small_end_islands", "the_end"] {
        biomes.bind_tag(tags::IS_END, biome_key(path));
    }
    biomes.bind_tag(tags::IS_END_HIGHLAND, biome_key("end_highlands"));
    biomes.bind_tag(tags::IS_END_BARRENS, biome_key("end_barrens"));
    biomes.bind_tag(tags::IS_SMALL_END_ISLAND, biome_key("small_end_islands"));
    biomes.bind_tag(tags::IS_END_CENTER, biome_key("the_end"));

    Arc::new(biomes)
}

struct Presets {
    expected: DimensionMap,
}

impl WorldPresetSource for Presets {
    fn expected_dimensions(&self) -> DimensionMap {
        self.expected.clone()
    }

    fn preset_dimensions(&self, _preset: &ResourceKey<preset::WorldPreset>) -> Option<DimensionMap> {
        // no vanilla preset in this setup, the tag index covers the stock biomes
        None
    }
}

struct OneRegion(Vec<ResourceKey<Biome>>);

impl Region for OneRegion {
    fn collect_biomes(
        &self,
        _biomes: &BiomeRegistry,
        found: &mut dyn FnMut(ResourceKey<Biome>),
    ) -> Result<(), anyhow::Error> {
        for biome in &self.0 {
            found(biome.clone());
        }
        Ok(())
    }
}

/// A provider managing the pack's nether biome and nothing in the end.
struct PackProvider;

impl RegionProvider for PackProvider {
    fn regions(&self, category: RegionCategory) -> Result<Vec<Box<dyn Region>>, anyhow::Error> {
        match category {
            RegionCategory::Nether => Ok(vec![Box::new(OneRegion(vec![
                modded_key("ashen:ashen_wastes"),
                // the pack also declares a biome this world never registered
                modded_key("ashen:unregistered"),
            ]))]),
            RegionCategory::Overworld => Ok(Vec::new()),
        }
    }

    fn end_biomes(&self, _landform: EndLandform) -> Result<Vec<ResourceKey<Biome>>, anyhow::Error> {
        Ok(Vec::new())
    }
}

#[test]
fn test_world_load_repairs_patches_and_reloads() {
    let registries = RegistryAccess::new(world_biomes());
    let classifier = Arc::new(BiomeTypeRegistry::new());
    let biomes = registries.biomes().clone();

    // the overworld source type is fed manually, tags never cover it
    classifier.register_if_unknown(biome_key("plains"), BiomeType::Overworld);

    let drifted_end_config = BiomeSourceConfig {
        map_version: MapVersion::Square,
        biome_size: 64,
        vertical_biomes: false,
    };

    // the save: an intact overworld, a superflat nether another tool left
    // behind, and an end whose source config drifted
    let mut dimensions = DimensionRegistry::new();
    dimensions.insert(
        dimension::OVERWORLD,
        LevelStem::new(
            vanilla_dimension_types::OVERWORLD,
            Arc::new(GeneratorKind::Noise(NoiseGenerator::new(
                noise_settings::OVERWORLD,
                7,
                OverworldBiomeSource::new(
                    biomes.clone(),
                    classifier.clone(),
                    BiomeSourceConfig::default(),
                )
                .into(),
            ))),
        ),
    );
    dimensions.insert(
        dimension::NETHER,
        LevelStem::new(
            vanilla_dimension_types::NETHER,
            Arc::new(GeneratorKind::Flat(FlatGenerator::new(FlatGeneratorSettings {
                layers: vec![ResourceLocation::vanilla_static("netherrack")],
                biome: ResourceLocation::vanilla_static("nether_wastes"),
            }))),
        ),
    );
    dimensions.insert(
        dimension::END,
        LevelStem::new(
            vanilla_dimension_types::END,
            Arc::new(GeneratorKind::Noise(NoiseGenerator::new(
                noise_settings::END,
                7,
                EndBiomeSource::new(biomes.clone(), classifier.clone(), drifted_end_config).into(),
            ))),
        ),
    );

    // what the installed content expects for each dimension
    let make_expected = |settings, source: BiomeSourceKind| {
        Arc::new(GeneratorKind::Noise(NoiseGenerator::new(settings, 7, source)))
    };
    let mut expected = DimensionMap::default();
    expected.insert(
        dimension::OVERWORLD,
        make_expected(
            noise_settings::OVERWORLD,
            OverworldBiomeSource::new(
                biomes.clone(),
                classifier.clone(),
                BiomeSourceConfig::default(),
            )
            .into(),
        ),
    );
    expected.insert(
        dimension::NETHER,
        make_expected(
            noise_settings::NETHER,
            NetherBiomeSource::new(
                biomes.clone(),
                classifier.clone(),
                BiomeSourceConfig::default(),
            )
            .into(),
        ),
    );
    expected.insert(
        dimension::END,
        make_expected(
            noise_settings::END,
            EndBiomeSource::new(
                biomes.clone(),
                classifier.clone(),
                BiomeSourceConfig::default(),
            )
            .into(),
        ),
    );
    let presets = Presets { expected };

    // classified after every source above ran its initial discovery;
    // only the overworld's reload fallback can surface it
    classifier.register_if_unknown(biome_key("meadow"), BiomeType::Overworld);

    let provider = PackProvider;
    let context = RepairContext {
        registries: &registries,
        active: Some(&registries),
        classifier: classifier.as_ref(),
        presets: &presets,
        region_provider: Some(&provider),
    };

    let original_overworld = dimensions.get(&dimension::OVERWORLD).unwrap().generator.clone();
    let original_nether = dimensions.get(&dimension::NETHER).unwrap().generator.clone();
    let original_end = dimensions.get(&dimension::END).unwrap().generator.clone();

    let repaired = repair_on_load(&WeldConfig::default(), context, dimensions).unwrap();
    assert_eq!(repaired.len(), 3);

    // nether: hard repair, new stem around the expected settings
    let nether = repaired.get(&dimension::NETHER).unwrap();
    assert!(!Arc::ptr_eq(&nether.generator, &original_nether));
    let GeneratorKind::Noise(generator) = nether.generator.as_ref() else {
        panic!("expected a noise generator in the repaired nether");
    };
    assert_eq!(*generator.settings(), noise_settings::NETHER);
    let mut placed = generator.biome_source().possible_biomes();
    placed.sort_unstable();
    // tag-classified stock biome plus the region provider's import; the
    // unregistered pack biome stayed out
    assert_eq!(
        placed,
        vec![modded_key("ashen:ashen_wastes"), biome_key("nether_wastes")]
    );

    // end: no repair, config patched in place
    let end = repaired.get(&dimension::END).unwrap();
    assert!(Arc::ptr_eq(&end.generator, &original_end));
    let end_config = end
        .generator
        .biome_source()
        .as_configured()
        .map(|source| source.config());
    assert_eq!(end_config, Some(BiomeSourceConfig::default()));

    // overworld: nothing to repair or patch, the reload fallback made
    // the late classification visible
    let overworld = repaired.get(&dimension::OVERWORLD).unwrap();
    assert!(Arc::ptr_eq(&overworld.generator, &original_overworld));
    let mut placed = overworld.generator.biome_source().possible_biomes();
    placed.sort_unstable();
    assert_eq!(placed, vec![biome_key("meadow"), biome_key("plains")]);
}
