//! The content loader and the frozen game data it produces.
//!
//! Registries are built in dependency order: items first, because creatures
//! carry items; creatures and items before locations, because locations
//! spawn creatures and scatter items. Each registry is frozen as soon as its
//! resource is read, so later stages see it read-only.

use std::time::Instant;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use dungeon_foundation::{Error, ErrorContext, ErrorKind, Identified, Registry, RegistryBuilder, Result};
use dungeon_records::{Record, RecordReader, RecordSource};

use crate::achievement::{Achievement, parse_achievements};
use crate::config::ContentConfig;
use crate::creature::CreaturePreset;
use crate::item::ItemBlueprint;
use crate::location::LocationPreset;
use crate::skill::{SkillDefinition, builtin_skills};

/// Every registry and text the game reads at startup.
///
/// Only a completed [`ContentLoader::load_all`] produces a `GameData`.
/// Cloning is cheap; the registries are shared.
#[derive(Clone, Debug)]
pub struct GameData {
    item_blueprints: Registry<ItemBlueprint>,
    creature_presets: Registry<CreaturePreset>,
    skill_definitions: Registry<SkillDefinition>,
    location_presets: Registry<LocationPreset>,
    achievements: Registry<Achievement>,
    license: String,
    tutorial: String,
}

impl GameData {
    /// Item blueprints by id.
    #[must_use]
    pub fn item_blueprints(&self) -> &Registry<ItemBlueprint> {
        &self.item_blueprints
    }

    /// Creature presets by id.
    #[must_use]
    pub fn creature_presets(&self) -> &Registry<CreaturePreset> {
        &self.creature_presets
    }

    /// Skill definitions by id.
    #[must_use]
    pub fn skill_definitions(&self) -> &Registry<SkillDefinition> {
        &self.skill_definitions
    }

    /// Location presets by id.
    #[must_use]
    pub fn location_presets(&self) -> &Registry<LocationPreset> {
        &self.location_presets
    }

    /// Achievements by id.
    #[must_use]
    pub fn achievements(&self) -> &Registry<Achievement> {
        &self.achievements
    }

    /// The license text.
    #[must_use]
    pub fn license(&self) -> &str {
        &self.license
    }

    /// The tutorial text.
    #[must_use]
    pub fn tutorial(&self) -> &str {
        &self.tutorial
    }
}

#[derive(Deserialize)]
struct LicenseDocument {
    license: String,
}

#[derive(Deserialize)]
struct TutorialDocument {
    tutorial: String,
}

/// Builds [`GameData`] from a [`RecordSource`].
///
/// A loader builds once. Calling [`ContentLoader::load_all`] again, even
/// after a failure, is a duplicate build error.
pub struct ContentLoader<S> {
    source: S,
    config: ContentConfig,
    started: bool,
}

impl<S: RecordSource> ContentLoader<S> {
    /// Creates a loader reading from `source`.
    #[must_use]
    pub fn new(source: S, config: ContentConfig) -> Self {
        Self {
            source,
            config,
            started: false,
        }
    }

    /// Returns the loader configuration.
    #[must_use]
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Returns the source the loader reads from.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads every resource, in dependency order.
    ///
    /// # Errors
    ///
    /// Returns the first fatal content error, or a duplicate build error if
    /// this loader has already run.
    pub fn load_all(&mut self) -> Result<GameData> {
        if self.started {
            return Err(Error::duplicate_build("game data"));
        }
        self.started = true;

        let start = Instant::now();
        tracing::info!("started loading the game data");

        let item_blueprints =
            self.load_records(&self.config.items, "item", ItemBlueprint::from_record)?;
        let creature_presets = self.load_records(&self.config.creatures, "creature", |record| {
            CreaturePreset::from_record(record, &item_blueprints)
        })?;
        let skill_definitions = create_skills()?;
        check_item_skills(&item_blueprints, &skill_definitions)?;
        let location_presets = self.load_records(&self.config.locations, "location", |record| {
            LocationPreset::from_record(record, &creature_presets, &item_blueprints)
        })?;
        let achievements = self.load_achievements()?;
        let license = self
            .read_json::<LicenseDocument>(&self.config.license)?
            .license;
        let tutorial = self
            .read_json::<TutorialDocument>(&self.config.tutorial)?
            .tutorial;

        tracing::info!(elapsed = ?start.elapsed(), "finished loading the game data");
        Ok(GameData {
            item_blueprints,
            creature_presets,
            skill_definitions,
            location_presets,
            achievements,
            license,
            tutorial,
        })
    }

    fn load_records<T, F>(
        &self,
        resource: &str,
        label: &'static str,
        mut build: F,
    ) -> Result<Registry<T>>
    where
        T: Identified,
        F: FnMut(&Record) -> Result<T>,
    {
        let mut reader = RecordReader::open(&self.source, resource, self.config.format.clone())?;
        let mut builder = RegistryBuilder::new(label);
        while reader.read_next_element()? {
            let Some(record) = reader.current() else {
                break;
            };
            let entry = build(record).map_err(|e| e.with_context(record.context()))?;
            tracing::debug!(registry = label, id = %entry.id(), "loaded record");
            builder
                .insert(entry)
                .map_err(|e| e.with_context(record.context()))?;
        }
        reader.close();

        let registry = builder.freeze();
        tracing::info!(registry = label, count = registry.len(), "registry loaded");
        Ok(registry)
    }

    fn load_achievements(&self) -> Result<Registry<Achievement>> {
        let resource = &self.config.achievements;
        let json = self.source.read_to_string(resource)?;
        let mut builder = RegistryBuilder::new("achievement");
        for achievement in parse_achievements(resource, &json)? {
            builder.insert(achievement).map_err(|e| {
                e.with_context(ErrorContext::new().with_resource(resource.clone()))
            })?;
        }
        let registry = builder.freeze();
        tracing::info!(registry = "achievement", count = registry.len(), "registry loaded");
        Ok(registry)
    }

    fn read_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let json = self.source.read_to_string(resource)?;
        serde_json::from_str(&json).map_err(|e| {
            Error::new(ErrorKind::Json {
                resource: resource.to_string(),
                message: e.to_string(),
            })
        })
    }
}

fn create_skills() -> Result<Registry<SkillDefinition>> {
    let mut builder = RegistryBuilder::new("skill");
    for skill in builtin_skills() {
        builder.insert(skill)?;
    }
    let registry = builder.freeze();
    tracing::info!(registry = "skill", count = registry.len(), "registry loaded");
    Ok(registry)
}

fn check_item_skills(
    items: &Registry<ItemBlueprint>,
    skills: &Registry<SkillDefinition>,
) -> Result<()> {
    for item in items.values() {
        if let Some(skill) = item.skill() {
            if !skills.contains(skill) {
                return Err(Error::dangling_reference("SKILL", skill.clone()));
            }
        }
    }
    Ok(())
}
