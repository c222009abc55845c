//! Creature presets.

use dungeon_foundation::{Error, Id, Identified, Name, Registry, Result, Selectable, Token};
use dungeon_records::{Luminosity, Record, Visibility};

use crate::fields::{int_field, read_name, read_tags};
use crate::item::ItemBlueprint;

/// A property a creature may have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CreatureTag {
    /// Leaves a corpse item behind.
    Corpse,
    /// Can be milked.
    Milkable,
    /// Attacks on sight.
    Aggressive,
    /// Cannot be healed by ordinary means.
    Undead,
}

impl Token for CreatureTag {
    const KIND: &'static str = "creature tag";
    const ALL: &'static [Self] = &[Self::Corpse, Self::Milkable, Self::Aggressive, Self::Undead];

    fn as_token(self) -> &'static str {
        match self {
            Self::Corpse => "CORPSE",
            Self::Milkable => "MILKABLE",
            Self::Aggressive => "AGGRESSIVE",
            Self::Undead => "UNDEAD",
        }
    }
}

/// A frozen template for spawning creatures.
#[derive(Clone, Debug, PartialEq)]
pub struct CreaturePreset {
    id: Id,
    creature_type: String,
    name: Name,
    health: i32,
    attack: i32,
    tags: Vec<CreatureTag>,
    visibility: Visibility,
    luminosity: Option<Luminosity>,
    weapon: Option<Id>,
    items: Vec<Id>,
}

impl CreaturePreset {
    /// Builds a preset from a `creatures.txt` record.
    ///
    /// # Errors
    ///
    /// Returns an error if `ID` or `TYPE` is missing, a tag or token is
    /// unknown, or `WEAPON` or `ITEMS` names an item missing from `items`.
    pub fn from_record(record: &Record, items: &Registry<ItemBlueprint>) -> Result<Self> {
        let resolve = |field: &'static str, raw: &str| -> Result<Id> {
            let id = Id::new(raw);
            if items.contains(&id) {
                Ok(id)
            } else {
                Err(Error::dangling_reference(field, id).with_context(record.field_context(field)))
            }
        };

        let weapon = if record.has_value("WEAPON") {
            Some(resolve("WEAPON", record.get_value("WEAPON")?)?)
        } else {
            None
        };
        let inventory = record
            .get_array_of_values("ITEMS")
            .into_iter()
            .map(|raw| resolve("ITEMS", raw))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id: Id::new(record.id()?),
            creature_type: record.get_value("TYPE")?.to_string(),
            name: read_name(record),
            health: int_field(record, "HEALTH"),
            attack: int_field(record, "ATTACK"),
            tags: read_tags(record)?,
            visibility: record.read_visibility()?,
            luminosity: record.read_luminosity()?,
            weapon,
            items: inventory,
        })
    }

    /// The creature type, e.g. `Beast`.
    #[must_use]
    pub fn creature_type(&self) -> &str {
        &self.creature_type
    }

    /// Starting health.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Unarmed attack.
    #[must_use]
    pub fn attack(&self) -> i32 {
        self.attack
    }

    /// The creature's tags.
    #[must_use]
    pub fn tags(&self) -> &[CreatureTag] {
        &self.tags
    }

    /// Returns true if the creature has `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: CreatureTag) -> bool {
        self.tags.contains(&tag)
    }

    /// How easily the creature is seen.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Light the creature emits.
    #[must_use]
    pub fn luminosity(&self) -> Option<Luminosity> {
        self.luminosity
    }

    /// The item the creature wields.
    #[must_use]
    pub fn weapon(&self) -> Option<&Id> {
        self.weapon.as_ref()
    }

    /// Items the creature carries.
    #[must_use]
    pub fn items(&self) -> &[Id] {
        &self.items
    }
}

impl Identified for CreaturePreset {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Selectable for CreaturePreset {
    fn name(&self) -> &Name {
        &self.name
    }
}
