//! Exploration statistics.
//!
//! Every map point the player has seen gets one [`ExplorationData`] entry
//! naming the location preset at that point. Per-location aggregates are
//! computed on demand from those entries.

use std::fmt;

use dungeon_foundation::{CounterMap, Id};

/// A point on the world map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What happened at one map point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorationData {
    location_id: Id,
    visits: u32,
    kills: u32,
}

impl ExplorationData {
    /// The location preset at this point.
    #[must_use]
    pub fn location_id(&self) -> &Id {
        &self.location_id
    }

    /// Times the player entered this point.
    #[must_use]
    pub fn visits(&self) -> u32 {
        self.visits
    }

    /// Creatures the player killed at this point.
    #[must_use]
    pub fn kills(&self) -> u32 {
        self.kills
    }
}

/// Visits and kills per map point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplorationStatistics {
    points: im::OrdMap<Point, ExplorationData>,
}

impl ExplorationStatistics {
    /// Creates empty exploration statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, point: Point, location_id: &Id) -> &mut ExplorationData {
        let data = self.points.entry(point).or_insert_with(|| ExplorationData {
            location_id: location_id.clone(),
            visits: 0,
            kills: 0,
        });
        if data.location_id != *location_id {
            tracing::warn!(
                %point,
                previous = %data.location_id,
                current = %location_id,
                "location at point changed; keeping counters",
            );
            data.location_id = location_id.clone();
        }
        data
    }

    /// Records one visit to `point`, which holds `location_id`.
    pub fn add_visit(&mut self, point: Point, location_id: &Id) {
        let data = self.entry(point, location_id);
        data.visits = data.visits.saturating_add(1);
    }

    /// Records one kill at `point`, which holds `location_id`.
    pub fn add_kill(&mut self, point: Point, location_id: &Id) {
        let data = self.entry(point, location_id);
        data.kills = data.kills.saturating_add(1);
    }

    /// Returns what happened at `point`, if the player has been there.
    #[must_use]
    pub fn get(&self, point: Point) -> Option<&ExplorationData> {
        self.points.get(&point)
    }

    /// Total kills per location id.
    #[must_use]
    pub fn kills_by_location_id(&self) -> CounterMap<Id> {
        self.points
            .values()
            .map(|data| (data.location_id.clone(), data.kills))
            .collect()
    }

    /// The highest visit count of any single point, per location id.
    #[must_use]
    pub fn maximum_visits_by_location_id(&self) -> CounterMap<Id> {
        let mut maxima = CounterMap::new();
        for data in self.points.values() {
            let current = maxima.get(&data.location_id);
            if data.visits > current {
                maxima.increment_by(data.location_id.clone(), data.visits - current);
            }
        }
        maxima
    }

    /// Number of distinct visited points, per location id.
    #[must_use]
    pub fn visited_locations_by_id(&self) -> CounterMap<Id> {
        self.points
            .values()
            .filter(|data| data.visits > 0)
            .map(|data| (data.location_id.clone(), 1))
            .collect()
    }
}
