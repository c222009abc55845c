//! Achievements and their unlock tracking.
//!
//! `achievements.json` holds one top-level `achievements` array. Each entry
//! carries optional `battleRequirements` and `explorationRequirements`
//! sections; every requirement present must be met for the achievement to
//! unlock, and a missing or empty section is met vacuously.

use serde::Deserialize;

use dungeon_foundation::{Error, ErrorKind, Id, Identified, Name, Registry, Result, Selectable};
use dungeon_stats::{BattleStatisticsRequirement, ExplorationRequirements, Statistics};

/// An unlockable achievement.
#[derive(Clone, Debug, PartialEq)]
pub struct Achievement {
    id: Id,
    name: Name,
    info: String,
    text: String,
    battle_requirements: Vec<BattleStatisticsRequirement>,
    exploration_requirements: ExplorationRequirements,
}

impl Achievement {
    /// A short description of how to unlock the achievement.
    #[must_use]
    pub fn info(&self) -> &str {
        &self.info
    }

    /// The message shown when the achievement unlocks.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Battle requirements.
    #[must_use]
    pub fn battle_requirements(&self) -> &[BattleStatisticsRequirement] {
        &self.battle_requirements
    }

    /// Exploration requirements.
    #[must_use]
    pub fn exploration_requirements(&self) -> &ExplorationRequirements {
        &self.exploration_requirements
    }

    /// Returns true if `statistics` meet every requirement.
    #[must_use]
    pub fn is_fulfilled(&self, statistics: &Statistics) -> bool {
        self.battle_requirements
            .iter()
            .all(|requirement| requirement.is_fulfilled(statistics))
            && self.exploration_requirements.is_fulfilled(statistics)
    }
}

impl Identified for Achievement {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Selectable for Achievement {
    fn name(&self) -> &Name {
        &self.name
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AchievementsDocument {
    achievements: Vec<AchievementDocument>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct AchievementDocument {
    id: Id,
    name: String,
    info: String,
    text: String,
    #[serde(default)]
    battle_requirements: Vec<BattleStatisticsRequirement>,
    #[serde(default)]
    exploration_requirements: ExplorationRequirements,
}

impl From<AchievementDocument> for Achievement {
    fn from(document: AchievementDocument) -> Self {
        Self {
            id: document.id,
            name: Name::new(document.name),
            info: document.info,
            text: document.text,
            battle_requirements: document.battle_requirements,
            exploration_requirements: document.exploration_requirements,
        }
    }
}

/// Decodes the achievements of an `achievements.json` document.
///
/// # Errors
///
/// Returns a JSON error naming `resource` if the document is malformed, a
/// required field is missing, or an unknown field is present.
pub fn parse_achievements(resource: &str, json: &str) -> Result<Vec<Achievement>> {
    let document: AchievementsDocument = serde_json::from_str(json).map_err(|e| {
        Error::new(ErrorKind::Json {
            resource: resource.to_string(),
            message: e.to_string(),
        })
    })?;
    Ok(document
        .achievements
        .into_iter()
        .map(Achievement::from)
        .collect())
}

/// Remembers which achievements have been unlocked.
#[derive(Clone, Debug, Default)]
pub struct AchievementTracker {
    unlocked: im::OrdSet<Id>,
}

impl AchievementTracker {
    /// Creates a tracker with nothing unlocked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the achievement with `id` has been unlocked.
    #[must_use]
    pub fn is_unlocked(&self, id: &Id) -> bool {
        self.unlocked.contains(id)
    }

    /// Number of unlocked achievements.
    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Unlocks every achievement `statistics` now fulfil, returning only the
    /// ones unlocked by this call.
    pub fn update<'a>(
        &mut self,
        achievements: &'a Registry<Achievement>,
        statistics: &Statistics,
    ) -> Vec<&'a Achievement> {
        let mut unlocked = Vec::new();
        for achievement in achievements.values() {
            if self.unlocked.contains(achievement.id()) || !achievement.is_fulfilled(statistics) {
                continue;
            }
            tracing::info!(achievement = %achievement.id(), "achievement unlocked");
            self.unlocked.insert(achievement.id().clone());
            unlocked.push(achievement);
        }
        unlocked
    }
}
