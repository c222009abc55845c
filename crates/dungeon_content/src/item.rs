//! Item blueprints.

use std::time::Duration;

use dungeon_foundation::{Error, Id, Identified, Name, Result, Selectable, Token};
use dungeon_records::{Luminosity, Record, Visibility};

use crate::fields::{double_field, int_field, read_name, read_tags};
use crate::period::parse_period;

/// A property an item may have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemTag {
    /// Can be wielded.
    Weapon,
    /// Can be eaten.
    Food,
    /// Tells the time.
    Clock,
    /// Can be read; requires a `TEXT` field.
    Book,
    /// Rots over its decomposition period.
    Decomposes,
    /// Can be repaired.
    Repairable,
    /// Weighs less as it loses integrity.
    WeightProportionalToIntegrity,
    /// Emits light.
    LightSource,
}

impl Token for ItemTag {
    const KIND: &'static str = "item tag";
    const ALL: &'static [Self] = &[
        Self::Weapon,
        Self::Food,
        Self::Clock,
        Self::Book,
        Self::Decomposes,
        Self::Repairable,
        Self::WeightProportionalToIntegrity,
        Self::LightSource,
    ];

    fn as_token(self) -> &'static str {
        match self {
            Self::Weapon => "WEAPON",
            Self::Food => "FOOD",
            Self::Clock => "CLOCK",
            Self::Book => "BOOK",
            Self::Decomposes => "DECOMPOSES",
            Self::Repairable => "REPAIRABLE",
            Self::WeightProportionalToIntegrity => "WEIGHT_PROPORTIONAL_TO_INTEGRITY",
            Self::LightSource => "LIGHT_SOURCE",
        }
    }
}

/// Current and maximum integrity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Integrity {
    /// Integrity a fresh item starts with.
    pub current: i32,
    /// Integrity of an undamaged item.
    pub maximum: i32,
}

/// A frozen template for creating items.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemBlueprint {
    id: Id,
    item_type: String,
    name: Name,
    tags: Vec<ItemTag>,
    text: Option<String>,
    integrity: Integrity,
    weight: f64,
    damage: i32,
    hit_rate: f64,
    integrity_decrement_on_hit: i32,
    nutrition: Option<i32>,
    integrity_decrement_on_eat: Option<i32>,
    decomposition_period: Option<Duration>,
    luminosity: Option<Luminosity>,
    visibility: Visibility,
    skill: Option<Id>,
}

impl ItemBlueprint {
    /// Builds a blueprint from an `items.txt` record.
    ///
    /// Malformed numbers default to zero with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if `ID`, `TYPE` or (for books) `TEXT` is missing, a
    /// tag is unknown, the decomposition period is malformed, or the
    /// visibility or luminosity token is unknown.
    pub fn from_record(record: &Record) -> Result<Self> {
        let tags: Vec<ItemTag> = read_tags(record)?;
        let text = if tags.contains(&ItemTag::Book) {
            Some(record.get_value("TEXT")?.to_string())
        } else {
            None
        };
        let decomposition_period = if record.has_value("DECOMPOSITION_PERIOD") {
            let raw = record.get_value("DECOMPOSITION_PERIOD")?;
            Some(
                parse_period(raw)
                    .map_err(|e| e.with_context(record.field_context("DECOMPOSITION_PERIOD")))?,
            )
        } else {
            None
        };
        let skill = if record.has_value("SKILL") {
            Some(Id::new(record.get_value("SKILL")?))
        } else {
            None
        };
        let optional_int = |key: &str| record.has_value(key).then(|| int_field(record, key));

        Ok(Self {
            id: Id::new(record.id()?),
            item_type: record.get_value("TYPE")?.to_string(),
            name: read_name(record),
            text,
            integrity: Integrity {
                current: int_field(record, "CUR_INTEGRITY"),
                maximum: int_field(record, "MAX_INTEGRITY"),
            },
            weight: double_field(record, "WEIGHT"),
            damage: int_field(record, "DAMAGE"),
            hit_rate: double_field(record, "HIT_RATE"),
            integrity_decrement_on_hit: int_field(record, "INTEGRITY_DECREMENT_ON_HIT"),
            nutrition: optional_int("NUTRITION"),
            integrity_decrement_on_eat: optional_int("INTEGRITY_DECREMENT_ON_EAT"),
            decomposition_period,
            luminosity: record.read_luminosity()?,
            visibility: record.read_visibility()?,
            skill,
            tags,
        })
    }

    /// The item type, e.g. `Weapon` or `Food`.
    #[must_use]
    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    /// The item's tags, in file order.
    #[must_use]
    pub fn tags(&self) -> &[ItemTag] {
        &self.tags
    }

    /// Returns true if the item has `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: ItemTag) -> bool {
        self.tags.contains(&tag)
    }

    /// The text of a book.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Starting and maximum integrity.
    #[must_use]
    pub fn integrity(&self) -> Integrity {
        self.integrity
    }

    /// Weight in kilograms.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Damage dealt when used as a weapon.
    #[must_use]
    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Probability of a hit, from 0.0 to 1.0.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        self.hit_rate
    }

    /// Integrity lost per hit.
    #[must_use]
    pub fn integrity_decrement_on_hit(&self) -> i32 {
        self.integrity_decrement_on_hit
    }

    /// Nutrition gained by eating the item.
    #[must_use]
    pub fn nutrition(&self) -> Option<i32> {
        self.nutrition
    }

    /// Integrity lost per bite.
    #[must_use]
    pub fn integrity_decrement_on_eat(&self) -> Option<i32> {
        self.integrity_decrement_on_eat
    }

    /// Time until the item rots away.
    #[must_use]
    pub fn decomposition_period(&self) -> Option<Duration> {
        self.decomposition_period
    }

    /// Light the item emits.
    #[must_use]
    pub fn luminosity(&self) -> Option<Luminosity> {
        self.luminosity
    }

    /// How easily the item is seen.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The skill reading this item teaches.
    #[must_use]
    pub fn skill(&self) -> Option<&Id> {
        self.skill.as_ref()
    }
}

impl Identified for ItemBlueprint {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Selectable for ItemBlueprint {
    fn name(&self) -> &Name {
        &self.name
    }
}

/// Looks up an item tag, wrapping failures as an invalid tag error.
///
/// # Errors
///
/// Returns an invalid tag error if `token` names no tag.
pub fn parse_item_tag(token: &str) -> Result<ItemTag> {
    ItemTag::from_token(token).map_err(Error::invalid_tag)
}
