//! Location presets.

use dungeon_foundation::{Error, Id, Identified, Name, Registry, Result, Selectable, Token};
use dungeon_records::{Color, Record};

use crate::creature::CreaturePreset;
use crate::fields::{double_field, int_field, list_part, read_name};
use crate::item::ItemBlueprint;

/// The terrain of a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocationKind {
    /// Walkable ground.
    Land,
    /// Water; blocks movement.
    River,
    /// A crossing over a river.
    Bridge,
}

impl Token for LocationKind {
    const KIND: &'static str = "location type";
    const ALL: &'static [Self] = &[Self::Land, Self::River, Self::Bridge];

    fn as_token(self) -> &'static str {
        match self {
            Self::Land => "LAND",
            Self::River => "RIVER",
            Self::Bridge => "BRIDGE",
        }
    }
}

/// A compass direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
}

impl Token for Direction {
    const KIND: &'static str = "direction";
    const ALL: &'static [Self] = &[Self::North, Self::East, Self::South, Self::West];

    fn as_token(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        }
    }
}

/// How a location is drawn and described.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationDescription {
    /// Map symbol.
    pub symbol: char,
    /// Map colour.
    pub color: Color,
    /// Text shown when looking around.
    pub info: Option<String>,
}

/// Spawns creatures of one preset into a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnerPreset {
    /// The creature spawned.
    pub creature_id: Id,
    /// Most creatures alive at once.
    pub population: u32,
    /// Turns between spawns.
    pub delay: u32,
}

/// An item that may appear in a location, with its frequency.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemFrequency {
    /// The item.
    pub item_id: Id,
    /// Chance of the item appearing, from 0.0 to 1.0.
    pub frequency: f64,
}

/// A frozen template for map locations.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationPreset {
    id: Id,
    kind: LocationKind,
    name: Name,
    description: LocationDescription,
    blob_size: i32,
    light_permittivity: f64,
    spawners: Vec<SpawnerPreset>,
    items: Vec<ItemFrequency>,
    blocked_entrances: Vec<Direction>,
}

impl LocationPreset {
    /// Builds a preset from a `locations.txt` record.
    ///
    /// Spawner and item ids are checked against the loaded registries.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, a token is unknown,
    /// a spawner or item entry has too few parts, or an entry refers to an
    /// id missing from `creatures` or `items`.
    pub fn from_record(
        record: &Record,
        creatures: &Registry<CreaturePreset>,
        items: &Registry<ItemBlueprint>,
    ) -> Result<Self> {
        let kind = LocationKind::from_token(record.get_value("TYPE")?)
            .map_err(|e| Error::from(e).with_context(record.field_context("TYPE")))?;

        let mut spawners = Vec::new();
        for entry in record.get_lists("SPAWNERS") {
            let [creature_id, population, delay, ..] = entry.as_slice() else {
                return Err(malformed_entry(record, "SPAWNERS", "ID/POPULATION/DELAY"));
            };
            let creature_id = Id::new(*creature_id);
            if !creatures.contains(&creature_id) {
                return Err(Error::dangling_reference("SPAWNERS", creature_id)
                    .with_context(record.field_context("SPAWNERS")));
            }
            spawners.push(SpawnerPreset {
                creature_id,
                population: list_part(record, "SPAWNERS", population),
                delay: list_part(record, "SPAWNERS", delay),
            });
        }

        let mut location_items = Vec::new();
        for entry in record.get_lists("ITEMS") {
            let [item_id, frequency, ..] = entry.as_slice() else {
                return Err(malformed_entry(record, "ITEMS", "ID/FREQUENCY"));
            };
            let item_id = Id::new(*item_id);
            if !items.contains(&item_id) {
                return Err(Error::dangling_reference("ITEMS", item_id)
                    .with_context(record.field_context("ITEMS")));
            }
            location_items.push(ItemFrequency {
                item_id,
                frequency: list_part(record, "ITEMS", frequency),
            });
        }

        let mut blocked_entrances = Vec::new();
        for entry in record.get_lists("BLOCKED_ENTRANCES") {
            for token in entry {
                let direction = Direction::from_token(token).map_err(|e| {
                    Error::from(e).with_context(record.field_context("BLOCKED_ENTRANCES"))
                })?;
                if !blocked_entrances.contains(&direction) {
                    blocked_entrances.push(direction);
                }
            }
        }

        Ok(Self {
            id: Id::new(record.id()?),
            kind,
            name: read_name(record),
            description: LocationDescription {
                symbol: record.read_character("SYMBOL")?,
                color: record.read_color()?,
                info: record
                    .has_value("INFO")
                    .then(|| record.get_value("INFO").map(str::to_string))
                    .transpose()?,
            },
            blob_size: int_field(record, "BLOB_SIZE"),
            light_permittivity: clamp_permittivity(record, double_field(record, "LIGHT_PERMITTIVITY")),
            spawners,
            items: location_items,
            blocked_entrances,
        })
    }

    /// The terrain of this location.
    #[must_use]
    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// Symbol, colour and info text.
    #[must_use]
    pub fn description(&self) -> &LocationDescription {
        &self.description
    }

    /// Preferred size of a cluster of this location on the map.
    #[must_use]
    pub fn blob_size(&self) -> i32 {
        self.blob_size
    }

    /// Fraction of daylight that reaches the ground, from 0.0 to 1.0.
    #[must_use]
    pub fn light_permittivity(&self) -> f64 {
        self.light_permittivity
    }

    /// Creature spawners.
    #[must_use]
    pub fn spawners(&self) -> &[SpawnerPreset] {
        &self.spawners
    }

    /// Items that may appear here.
    #[must_use]
    pub fn items(&self) -> &[ItemFrequency] {
        &self.items
    }

    /// Returns true if the location cannot be entered from `direction`.
    #[must_use]
    pub fn is_blocked(&self, direction: Direction) -> bool {
        self.blocked_entrances.contains(&direction)
    }

    /// Directions the location cannot be entered from.
    #[must_use]
    pub fn blocked_entrances(&self) -> &[Direction] {
        &self.blocked_entrances
    }
}

impl Identified for LocationPreset {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Selectable for LocationPreset {
    fn name(&self) -> &Name {
        &self.name
    }
}

fn malformed_entry(record: &Record, field: &str, expected: &str) -> Error {
    Error::parse(
        format!("{field} entries must be written {expected}"),
        record.resource(),
        record.line(),
    )
    .with_context(record.field_context(field))
}

fn clamp_permittivity(record: &Record, value: f64) -> f64 {
    let clamped = value.clamp(0.0, 1.0);
    if (clamped - value).abs() > f64::EPSILON || value.is_nan() {
        tracing::warn!(
            record = %record.context(),
            value,
            "light permittivity outside 0..1; clamping",
        );
    }
    if value.is_nan() { 0.0 } else { clamped }
}
