//! Live player statistics and the requirements evaluated against them.
//!
//! This crate provides:
//! - [`BattleStatistics`] - Counts of battle outcomes, queryable by
//!   [`BattleStatisticsQuery`]
//! - [`ExplorationStatistics`] - Visits and kills per map point
//! - [`Statistics`] - Both, as owned by the player
//! - [`BattleStatisticsRequirement`] and [`ExplorationRequirements`] -
//!   Predicates over the statistics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod battle;
pub mod exploration;
pub mod requirement;

pub use battle::{
    BattleRecord, BattleStatistics, BattleStatisticsQuery, CauseOfDeath, CauseOfDeathKind,
    PartOfDay,
};
pub use exploration::{ExplorationData, ExplorationStatistics, Point};
pub use requirement::{BattleStatisticsRequirement, ExplorationRequirements};

use dungeon_foundation::Id;

/// Everything the player has accumulated.
///
/// Owned by a single session; the type has no internal locking.
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    /// Battle outcomes.
    pub battle: BattleStatistics,
    /// Map exploration.
    pub exploration: ExplorationStatistics,
}

impl Statistics {
    /// Creates empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a kill: the battle outcome and where it happened.
    pub fn record_kill(&mut self, point: Point, location_id: &Id, battle: BattleRecord) {
        self.exploration.add_kill(point, location_id);
        self.battle.add_battle(battle);
    }

    /// Records a visit to a map point.
    pub fn record_visit(&mut self, point: Point, location_id: &Id) {
        self.exploration.add_visit(point, location_id);
    }
}
