//! Live player state over frozen game data.

use dungeon_content::{AchievementTracker, GameData};
use dungeon_foundation::{BoundedHistory, Error, Id, Identified, Result};
use dungeon_stats::{BattleRecord, Point, Statistics};

use crate::config::SessionConfig;
use crate::spellcaster::SpellBook;

/// One player's session.
///
/// The game data is shared and read-only; everything else belongs to the
/// session alone.
#[derive(Clone, Debug)]
pub struct Session {
    data: GameData,
    spell_book: SpellBook,
    statistics: Statistics,
    tracker: AchievementTracker,
    history: BoundedHistory<String>,
}

impl Session {
    /// Creates a session over loaded game data.
    ///
    /// # Errors
    ///
    /// Returns an error if the history capacity is zero.
    pub fn new(data: GameData, config: &SessionConfig) -> Result<Self> {
        Ok(Self {
            data,
            spell_book: SpellBook::new(),
            statistics: Statistics::new(),
            tracker: AchievementTracker::new(),
            history: BoundedHistory::new(config.history_capacity)?,
        })
    }

    /// The frozen game data.
    #[must_use]
    pub fn data(&self) -> &GameData {
        &self.data
    }

    /// The learned spells.
    #[must_use]
    pub fn spell_book(&self) -> &SpellBook {
        &self.spell_book
    }

    /// The player's statistics.
    #[must_use]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// The achievements unlocked so far.
    #[must_use]
    pub fn tracker(&self) -> &AchievementTracker {
        &self.tracker
    }

    /// Recent commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &BoundedHistory<String> {
        &self.history
    }

    /// Remembers a command line.
    pub fn record_command(&mut self, line: &str) {
        self.history.add(line.to_string());
    }

    /// Learns the skill with `id`, returning false if it was already known.
    ///
    /// # Errors
    ///
    /// Returns a dangling reference error if no skill has that id.
    pub fn learn_skill(&mut self, id: &Id) -> Result<bool> {
        let skill = self
            .data
            .skill_definitions()
            .get_shared(id)
            .ok_or_else(|| Error::dangling_reference("skill", id.clone()))?;
        Ok(self.spell_book.learn(skill))
    }

    /// Records a kill and returns the achievements it unlocked.
    pub fn record_kill(&mut self, point: Point, location_id: &Id, battle: BattleRecord) -> Vec<Id> {
        self.statistics.record_kill(point, location_id, battle);
        self.update_achievements()
    }

    /// Records a visit and returns the achievements it unlocked.
    pub fn record_visit(&mut self, point: Point, location_id: &Id) -> Vec<Id> {
        self.statistics.record_visit(point, location_id);
        self.update_achievements()
    }

    /// Unlocks every achievement the statistics now fulfil, returning the
    /// ids of those not unlocked before.
    pub fn update_achievements(&mut self) -> Vec<Id> {
        self.tracker
            .update(self.data.achievements(), &self.statistics)
            .into_iter()
            .map(|achievement| achievement.id().clone())
            .collect()
    }
}
