//! Frozen content registries for Dungeon.
//!
//! This crate turns the game's resources into read-only registries:
//!
//! ```text
//! items.txt ──────► ItemBlueprint ──┐
//! creatures.txt ──► CreaturePreset ─┤ (checked against items)
//! built-in ───────► SkillDefinition ┤
//! locations.txt ──► LocationPreset ─┤ (checked against creatures, items)
//! achievements.json ► Achievement ──┤
//! license.json, tutorial.json ──────┴──► GameData
//! ```
//!
//! [`ContentLoader::load_all`] runs every stage once and returns
//! [`GameData`], the owned context the rest of the game reads from.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod achievement;
pub mod config;
pub mod creature;
pub mod fields;
pub mod item;
pub mod loader;
pub mod location;
pub mod period;
pub mod skill;

pub use achievement::{Achievement, AchievementTracker, parse_achievements};
pub use config::ContentConfig;
pub use creature::{CreaturePreset, CreatureTag};
pub use fields::{name_from_array, tags_from_array};
pub use item::{Integrity, ItemBlueprint, ItemTag, parse_item_tag};
pub use loader::{ContentLoader, GameData};
pub use location::{
    Direction, ItemFrequency, LocationDescription, LocationKind, LocationPreset, SpawnerPreset,
};
pub use period::parse_period;
pub use skill::{SkillDefinition, builtin_skills};
