//! Display names.

use std::fmt;

/// Singular form used when a name array is empty.
pub const SENTINEL: &str = "ERROR";

/// A localized name with singular and plural forms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name {
    singular: String,
    plural: String,
}

impl Name {
    /// Creates a name whose plural equals its singular.
    #[must_use]
    pub fn new(singular: impl Into<String>) -> Self {
        let singular = singular.into();
        Self {
            plural: singular.clone(),
            singular,
        }
    }

    /// Creates a name with distinct singular and plural forms.
    #[must_use]
    pub fn with_plural(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// The sentinel name substituted for unnamed content.
    #[must_use]
    pub fn sentinel() -> Self {
        Self::new(SENTINEL)
    }

    /// Returns the singular form.
    #[must_use]
    pub fn singular(&self) -> &str {
        &self.singular
    }

    /// Returns the plural form.
    #[must_use]
    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Returns the singular or plural form appropriate for `count`.
    #[must_use]
    pub fn quantified(&self, count: usize) -> String {
        if count == 1 {
            format!("1 {}", self.singular)
        } else {
            format!("{count} {}", self.plural)
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.singular)
    }
}

/// Something the player can refer to by name.
pub trait Selectable {
    /// The display name.
    fn name(&self) -> &Name;

    /// Additional names the entity answers to.
    fn aliases(&self) -> &[String] {
        &[]
    }
}
