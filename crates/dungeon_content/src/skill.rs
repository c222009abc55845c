//! Skill definitions.
//!
//! Skills are not read from a resource; the built-in set is registered by
//! the loader.

use dungeon_foundation::{Id, Identified, Name, Selectable};

/// A learnable spell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillDefinition {
    id: Id,
    name: Name,
    mana_cost: u32,
    repair: u32,
    magnitude: u32,
}

impl SkillDefinition {
    /// Creates a skill definition.
    #[must_use]
    pub fn new(id: &str, name: &str, mana_cost: u32, repair: u32, magnitude: u32) -> Self {
        Self {
            id: Id::new(id),
            name: Name::new(name),
            mana_cost,
            repair,
            magnitude,
        }
    }

    /// Mana spent per cast.
    #[must_use]
    pub fn mana_cost(&self) -> u32 {
        self.mana_cost
    }

    /// Integrity restored per cast.
    #[must_use]
    pub fn repair(&self) -> u32 {
        self.repair
    }

    /// Damage dealt per cast.
    #[must_use]
    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }
}

impl Identified for SkillDefinition {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Selectable for SkillDefinition {
    fn name(&self) -> &Name {
        &self.name
    }
}

/// The built-in skills.
#[must_use]
pub fn builtin_skills() -> Vec<SkillDefinition> {
    vec![
        SkillDefinition::new("FIREBALL", "Fireball", 10, 0, 6),
        SkillDefinition::new("BURNING_GROUND", "Burning Ground", 18, 0, 12),
        SkillDefinition::new("REPAIR", "Repair", 0, 40, 10),
    ]
}
