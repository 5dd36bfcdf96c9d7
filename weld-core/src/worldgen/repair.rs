//! The world-load repair pass.
//!
//! Runs once while a world comes up, after registries are frozen and
//! before any chunk generates. For every dimension in the save it feeds
//! the biome classifier from three sources in a fixed order, tag-based
//! preclassification, the vanilla reference dimensions and the optional
//! region provider, and then reconciles the persisted generator with
//! the expected one: a hard rebuild when the generator drifted, a config
//! patch when only the biome-source settings drifted, and a plain
//! biome-list reload when nothing else applied.

use std::cell::OnceCell;

use rustc_hash::FxHashSet;
use weld_registry::{
    Biome, BiomeRegistry, BiomeType, BiomeTypeRegistry, RegistryAccess, tags,
};
use weld_utils::{ResourceKey, TagKey};

use crate::biome_source::BiomeSource;
use crate::chunk::{ChunkGenerator, EnforceError, GeneratorKind};
use crate::config::WeldConfig;
use crate::dimension::{self, DimensionRegistry, LevelStem};

use super::preset::{self, DimensionMap, WorldPresetSource};
use super::region::{EndLandform, RegionCategory, RegionProvider};

/// Everything one repair pass reads. The caller resolves the optional
/// capabilities once at startup and hands them in here.
#[derive(Clone, Copy)]
pub struct RepairContext<'a> {
    /// Registries of the world being loaded; the enforcement protocol
    /// rebinds rebuilt biome sources against these.
    pub registries: &'a RegistryAccess,
    /// The currently active registry snapshot, when one exists. Tag
    /// preclassification and the region import read biomes from here
    /// and are skipped entirely without it.
    pub active: Option<&'a RegistryAccess>,
    /// The classifier every import step records into.
    pub classifier: &'a BiomeTypeRegistry,
    /// Source of expected and vanilla dimension configurations.
    pub presets: &'a dyn WorldPresetSource,
    /// The optional region-provider library, when detected at startup.
    pub region_provider: Option<&'a dyn RegionProvider>,
}

// specific landform tags first: under first-writer-wins, table order is
// the tie-break for biomes carrying more than one tag
static NETHER_TAGS: [(TagKey<Biome>, BiomeType); 1] = [(tags::IS_NETHER, BiomeType::Nether)];
static END_TAGS: [(TagKey<Biome>, BiomeType); 6] = [
    (tags::IS_END_HIGHLAND, BiomeType::EndLand),
    (tags::IS_END_MIDLAND, BiomeType::EndLand),
    (tags::IS_END_BARRENS, BiomeType::EndBarrens),
    (tags::IS_SMALL_END_ISLAND, BiomeType::EndVoid),
    (tags::IS_END_CENTER, BiomeType::EndCenter),
    (tags::IS_END, BiomeType::EndLand),
];

fn dimension_tag_table(key: &ResourceKey<LevelStem>) -> &'static [(TagKey<Biome>, BiomeType)] {
    if *key == dimension::NETHER {
        &NETHER_TAGS
    } else if *key == dimension::END {
        &END_TAGS
    } else {
        &[]
    }
}

/// Applies the configured world-load repair to `dimensions` and returns
/// the registry the caller must continue loading with.
pub fn repair_on_load(
    config: &WeldConfig,
    context: RepairContext<'_>,
    dimensions: DimensionRegistry,
) -> Result<DimensionRegistry, EnforceError> {
    if !config.repair_biome_sources {
        return Ok(dimensions);
    }

    let mut context = context;
    if !config.import_region_biomes {
        context.region_provider = None;
    }
    repair_biome_sources(&context, dimensions)
}

/// Runs one repair pass over every dimension of `dimensions`.
///
/// The input registry is consumed; on success the caller must continue
/// with the returned one, which shares every stem the pass left alone.
pub fn repair_biome_sources(
    context: &RepairContext<'_>,
    dimensions: DimensionRegistry,
) -> Result<DimensionRegistry, EnforceError> {
    let pass = RepairPass {
        context,
        vanilla_dimensions: OnceCell::new(),
    };
    pass.run(dimensions)
}

struct RepairPass<'a> {
    context: &'a RepairContext<'a>,
    // resolved at most once per pass, then dropped with it
    vanilla_dimensions: OnceCell<Option<DimensionMap>>,
}

impl RepairPass<'_> {
    fn run(&self, mut dimensions: DimensionRegistry) -> Result<DimensionRegistry, EnforceError> {
        let expected = self.context.presets.expected_dimensions();

        // iterate a snapshot; enforcement swaps the registry under us
        let loaded_stems: Vec<(ResourceKey<LevelStem>, LevelStem)> = dimensions
            .iter()
            .map(|(key, stem)| (key.clone(), stem.clone()))
            .collect();

        for (key, loaded_stem) in loaded_stems {
            self.classify_dimension_tags(&key);
            self.import_vanilla_biomes(&key);
            self.import_region_biomes(&key);

            let loaded = loaded_stem.generator.as_ref();
            let mut repaired = false;
            let mut reconciled = false;

            if let Some(reference) = expected.get(&key) {
                if let Some(enforcer) = reference.as_enforceable() {
                    if enforcer.should_repair(loaded) {
                        log::info!("Enforcing expected chunk generator for dimension {key}");
                        dimensions = enforcer.enforce(
                            self.context.registries,
                            &key,
                            &loaded_stem.dimension_type,
                            loaded,
                            dimensions,
                        )?;
                        repaired = true;
                    }
                }

                if !repaired {
                    reconciled = reconcile_source_config(loaded, reference.as_ref());
                    if reconciled {
                        log::debug!("Patched biome source config for dimension {key}");
                    }
                }
            }

            if !repaired && !reconciled {
                if let Some(reloadable) = loaded.biome_source().as_reloadable() {
                    reloadable.reload_biomes();
                }
            }
        }

        Ok(dimensions)
    }

    /// Feeds every biome carrying one of the dimension's category tags
    /// to the classifier.
    fn classify_dimension_tags(&self, key: &ResourceKey<LevelStem>) {
        let Some(active) = self.context.active else {
            return;
        };

        for (tag, biome_type) in dimension_tag_table(key) {
            for biome in active.biomes().iter_tag(tag) {
                self.context
                    .classifier
                    .register_if_unknown(biome.clone(), *biome_type);
            }
        }
    }

    /// Classifies every stock biome of the dimension under its main
    /// type, resolving the vanilla dimension map at most once per pass.
    fn import_vanilla_biomes(&self, key: &ResourceKey<LevelStem>) {
        let Some(biome_type) = dimension::main_biome_type(key) else {
            return;
        };

        let vanilla = self.vanilla_dimensions.get_or_init(|| {
            let dimensions = self.context.presets.preset_dimensions(&preset::NORMAL);
            if dimensions.is_none() {
                log::warn!("Default world preset is unavailable, skipping vanilla biome import");
            }
            dimensions
        });
        let Some(vanilla) = vanilla else {
            return;
        };
        let Some(generator) = vanilla.get(key) else {
            return;
        };

        for biome in generator.biome_source().possible_biomes() {
            self.context.classifier.register_if_unknown(biome, biome_type);
        }
    }

    /// Best-effort import from the optional region provider. A missing
    /// provider or missing snapshot is a silent skip; a failure inside
    /// either sub-procedure downgrades to a warning and classifies
    /// nothing.
    fn import_region_biomes(&self, key: &ResourceKey<LevelStem>) {
        let Some(provider) = self.context.region_provider else {
            return;
        };
        let Some(active) = self.context.active else {
            return;
        };
        let biomes = active.biomes().as_ref();

        if *key == dimension::NETHER {
            if let Err(error) = self.import_nether_regions(provider, biomes) {
                log::warn!("Failed to import region provider nether biomes: {error}");
            }
        } else if *key == dimension::END {
            if let Err(error) = self.import_end_landforms(provider, biomes) {
                log::warn!("Failed to import region provider end biomes: {error}");
            }
        }
    }

    fn import_nether_regions(
        &self,
        provider: &dyn RegionProvider,
        biomes: &BiomeRegistry,
    ) -> Result<(), anyhow::Error> {
        let mut found: FxHashSet<ResourceKey<Biome>> = FxHashSet::default();
        for region in provider.regions(RegionCategory::Nether)? {
            region.collect_biomes(biomes, &mut |biome| {
                // entries the world never registered are skipped, they
                // must not poison the classifier
                if biomes.contains_key(&biome) {
                    found.insert(biome);
                }
            })?;
        }

        for biome in found {
            self.context
                .classifier
                .register_if_unknown(biome, BiomeType::Nether);
        }
        Ok(())
    }

    fn import_end_landforms(
        &self,
        provider: &dyn RegionProvider,
        biomes: &BiomeRegistry,
    ) -> Result<(), anyhow::Error> {
        for landform in EndLandform::ALL {
            for biome in provider.end_biomes(landform)? {
                if biomes.contains_key(&biome) {
                    self.context
                        .classifier
                        .register_if_unknown(biome, landform.biome_type());
                }
            }
        }
        Ok(())
    }
}

/// Copies the reference biome source's config over the loaded one when
/// both carry one and they differ. Returns whether anything changed.
fn reconcile_source_config(loaded: &GeneratorKind, reference: &GeneratorKind) -> bool {
    let Some(loaded_source) = loaded.biome_source().as_configured() else {
        return false;
    };
    let Some(reference_source) = reference.biome_source().as_configured() else {
        return false;
    };

    let expected = reference_source.config();
    if loaded_source.config() == expected {
        return false;
    }

    loaded_source.set_config(expected);
    true
}
