//! Battle statistics.

use std::fmt;

use dungeon_foundation::{CounterMap, Id, Token};

#[cfg(feature = "serde")]
use serde::Deserialize;

/// What killed a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CauseOfDeathKind {
    /// Bare hands.
    Unarmed,
    /// A weapon, identified by item id.
    Weapon,
    /// A spell, identified by skill id.
    Spell,
}

impl Token for CauseOfDeathKind {
    const KIND: &'static str = "cause of death";
    const ALL: &'static [Self] = &[Self::Unarmed, Self::Weapon, Self::Spell];

    fn as_token(self) -> &'static str {
        match self {
            Self::Unarmed => "UNARMED",
            Self::Weapon => "WEAPON",
            Self::Spell => "SPELL",
        }
    }
}

/// A cause of death: its kind and the id of the weapon or spell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct CauseOfDeath {
    /// The kind of cause.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: CauseOfDeathKind,
    /// The weapon or spell id; `UNARMED` for unarmed kills.
    pub id: Id,
}

impl CauseOfDeath {
    /// Creates a cause of death.
    #[must_use]
    pub fn new(kind: CauseOfDeathKind, id: impl Into<Id>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// The cause of death for unarmed kills.
    #[must_use]
    pub fn unarmed() -> Self {
        Self::new(CauseOfDeathKind::Unarmed, "UNARMED")
    }
}

impl fmt::Display for CauseOfDeath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind.as_token(), self.id)
    }
}

/// The part of the in-game day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PartOfDay {
    /// Sunrise.
    Dawn,
    /// Early day.
    Morning,
    /// Midday.
    Noon,
    /// Late day.
    Afternoon,
    /// Sunset.
    Dusk,
    /// Early night.
    Evening,
    /// The middle of the night.
    Midnight,
    /// Late night.
    Night,
}

impl Token for PartOfDay {
    const KIND: &'static str = "part of day";
    const ALL: &'static [Self] = &[
        Self::Dawn,
        Self::Morning,
        Self::Noon,
        Self::Afternoon,
        Self::Dusk,
        Self::Evening,
        Self::Midnight,
        Self::Night,
    ];

    fn as_token(self) -> &'static str {
        match self {
            Self::Dawn => "DAWN",
            Self::Morning => "MORNING",
            Self::Noon => "NOON",
            Self::Afternoon => "AFTERNOON",
            Self::Dusk => "DUSK",
            Self::Evening => "EVENING",
            Self::Midnight => "MIDNIGHT",
            Self::Night => "NIGHT",
        }
    }
}

/// The outcome of one battle the player won.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BattleRecord {
    /// Id of the defeated creature.
    pub id: Id,
    /// Type of the defeated creature, e.g. `Beast`.
    pub creature_type: String,
    /// What killed it.
    pub cause_of_death: CauseOfDeath,
    /// When it died.
    pub part_of_day: PartOfDay,
}

impl BattleRecord {
    /// Creates a battle record.
    #[must_use]
    pub fn new(
        id: impl Into<Id>,
        creature_type: impl Into<String>,
        cause_of_death: CauseOfDeath,
        part_of_day: PartOfDay,
    ) -> Self {
        Self {
            id: id.into(),
            creature_type: creature_type.into(),
            cause_of_death,
            part_of_day,
        }
    }
}

/// A query over battle records.
///
/// Every field is optional; an absent field is unconstrained, so the empty
/// query matches every battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct BattleStatisticsQuery {
    /// Only battles against this creature id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<Id>,
    /// Only battles against creatures of this type.
    #[cfg_attr(feature = "serde", serde(default, rename = "type"))]
    pub creature_type: Option<String>,
    /// Only battles won by this cause.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cause_of_death: Option<CauseOfDeath>,
    /// Only battles won at this part of the day.
    #[cfg_attr(feature = "serde", serde(default))]
    pub part_of_day: Option<PartOfDay>,
}

impl BattleStatisticsQuery {
    /// Creates a query matching every battle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to constrain the creature id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder method to constrain the creature type.
    #[must_use]
    pub fn with_type(mut self, creature_type: impl Into<String>) -> Self {
        self.creature_type = Some(creature_type.into());
        self
    }

    /// Builder method to constrain the cause of death.
    #[must_use]
    pub fn with_cause_of_death(mut self, cause: CauseOfDeath) -> Self {
        self.cause_of_death = Some(cause);
        self
    }

    /// Builder method to constrain the part of day.
    #[must_use]
    pub fn with_part_of_day(mut self, part_of_day: PartOfDay) -> Self {
        self.part_of_day = Some(part_of_day);
        self
    }

    /// Returns true if `record` satisfies every constrained field.
    #[must_use]
    pub fn matches(&self, record: &BattleRecord) -> bool {
        self.id.as_ref().is_none_or(|id| *id == record.id)
            && self
                .creature_type
                .as_ref()
                .is_none_or(|t| *t == record.creature_type)
            && self
                .cause_of_death
                .as_ref()
                .is_none_or(|c| *c == record.cause_of_death)
            && self.part_of_day.is_none_or(|p| p == record.part_of_day)
    }
}

/// Counts of battle outcomes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattleStatistics {
    records: CounterMap<BattleRecord>,
}

impl BattleStatistics {
    /// Creates empty battle statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one won battle.
    pub fn add_battle(&mut self, record: BattleRecord) {
        tracing::debug!(creature = %record.id, cause = %record.cause_of_death, "battle recorded");
        self.records.increment(record);
    }

    /// Returns the number of battles matching `query`.
    #[must_use]
    pub fn count_matches(&self, query: &BattleStatisticsQuery) -> u64 {
        self.records
            .iter()
            .filter(|(record, _)| query.matches(record))
            .map(|(_, count)| u64::from(count))
            .sum()
    }

    /// Returns the total number of battles.
    #[must_use]
    pub fn battle_count(&self) -> u64 {
        self.records.total()
    }
}
