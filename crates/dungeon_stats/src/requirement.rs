//! Requirements evaluated against [`Statistics`].
//!
//! An achievement unlocks only when every requirement it carries is met.
//! Requirements that are absent or empty are met vacuously.

use dungeon_foundation::{CounterMap, Id};

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::Statistics;
use crate::battle::BattleStatisticsQuery;

/// At least `count` battles matching `query`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct BattleStatisticsRequirement {
    /// Which battles count.
    pub query: BattleStatisticsQuery,
    /// How many are needed.
    pub count: u32,
}

impl BattleStatisticsRequirement {
    /// Creates a requirement.
    #[must_use]
    pub fn new(query: BattleStatisticsQuery, count: u32) -> Self {
        Self { query, count }
    }

    /// Returns true if the battle statistics satisfy this requirement.
    #[must_use]
    pub fn is_fulfilled(&self, statistics: &Statistics) -> bool {
        statistics.battle.count_matches(&self.query) >= u64::from(self.count)
    }
}

/// Per-location exploration thresholds.
///
/// Each map entry is a minimum: the player must reach at least that value
/// for that location id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ExplorationRequirements {
    /// Minimum kills at points of each location.
    #[cfg_attr(feature = "serde", serde(rename = "killsByLocationID"))]
    pub kills_by_location_id: CounterMap<Id>,
    /// Minimum visits to a single point of each location.
    #[cfg_attr(feature = "serde", serde(rename = "maximumNumberOfVisits"))]
    pub maximum_number_of_visits: CounterMap<Id>,
    /// Minimum distinct visited points of each location.
    #[cfg_attr(feature = "serde", serde(rename = "visitedLocations"))]
    pub visited_locations: CounterMap<Id>,
}

impl ExplorationRequirements {
    /// Returns true if no threshold is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kills_by_location_id.is_empty()
            && self.maximum_number_of_visits.is_empty()
            && self.visited_locations.is_empty()
    }

    /// Returns true if every threshold is reached.
    #[must_use]
    pub fn is_fulfilled(&self, statistics: &Statistics) -> bool {
        if self.is_empty() {
            return true;
        }
        let exploration = &statistics.exploration;
        at_least(
            &exploration.kills_by_location_id(),
            &self.kills_by_location_id,
        ) && at_least(
            &exploration.maximum_visits_by_location_id(),
            &self.maximum_number_of_visits,
        ) && at_least(
            &exploration.visited_locations_by_id(),
            &self.visited_locations,
        )
    }
}

fn at_least(actual: &CounterMap<Id>, required: &CounterMap<Id>) -> bool {
    required.iter().all(|(id, count)| actual.get(id) >= count)
}
