//! Learned spells and parsing of `cast` commands.
//!
//! `cast <spell> [on <target>]` matches the words before `on` against the
//! spells the player knows; the words after it name the target.

use std::sync::Arc;

use dungeon_content::SkillDefinition;
use dungeon_foundation::{Id, Identified, Selectable};
use dungeon_parser::{MatchOutcome, Split, find_best_complete_matches};

/// What a `cast` command resolved to.
#[derive(Debug)]
pub enum CastOutcome<'a, S> {
    /// No spell was named.
    NoArguments,
    /// The words matched no known spell.
    NoMatch,
    /// The words matched several spells equally well.
    Ambiguous(Vec<&'a SkillDefinition>),
    /// One spell was chosen.
    Cast {
        /// The spell cast.
        spell: &'a SkillDefinition,
        /// The words after `on`, empty if no target was given.
        target: &'a [S],
    },
}

/// The spells a player has learned, in learning order.
#[derive(Clone, Debug, Default)]
pub struct SpellBook {
    spells: Vec<Arc<SkillDefinition>>,
}

impl SpellBook {
    /// Creates an empty spell book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Learns `skill`, returning false if it was already known.
    pub fn learn(&mut self, skill: Arc<SkillDefinition>) -> bool {
        if self.knows(skill.id()) {
            tracing::warn!(skill = %skill.id(), "tried to learn a spell that is already known");
            return false;
        }
        tracing::info!(skill = %skill.id(), "learned {}", skill.name());
        self.spells.push(skill);
        true
    }

    /// Returns true if the spell with `id` has been learned.
    #[must_use]
    pub fn knows(&self, id: &Id) -> bool {
        self.spells.iter().any(|spell| spell.id() == id)
    }

    /// Iterates over the learned spells.
    pub fn spells(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.spells.iter().map(Arc::as_ref)
    }

    /// Number of learned spells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spells.len()
    }

    /// Returns true if no spell has been learned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Resolves the arguments of a `cast` command.
    pub fn parse_cast<'a, S: AsRef<str>>(&'a self, arguments: &'a [S]) -> CastOutcome<'a, S> {
        if arguments.is_empty() {
            return CastOutcome::NoArguments;
        }
        let split = Split::split_on_on(arguments);
        match find_best_complete_matches(self.spells(), split.before()).classify() {
            MatchOutcome::None => CastOutcome::NoMatch,
            MatchOutcome::Ambiguous(spells) => CastOutcome::Ambiguous(spells),
            MatchOutcome::Unique(spell) => {
                tracing::info!(skill = %spell.id(), "casted {}", spell.name());
                CastOutcome::Cast {
                    spell,
                    target: split.after(),
                }
            }
        }
    }
}
