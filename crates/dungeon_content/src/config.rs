//! Configuration for content loading.

use dungeon_records::RecordFormat;

/// Names of the content resources and the record format they use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentConfig {
    /// Item blueprints (record format).
    pub items: String,

    /// Creature presets (record format).
    pub creatures: String,

    /// Location presets (record format).
    pub locations: String,

    /// Achievements (JSON).
    pub achievements: String,

    /// License text (JSON, `{"license": "..."}`).
    pub license: String,

    /// Tutorial text (JSON, `{"tutorial": "..."}`).
    pub tutorial: String,

    /// Delimiters of the record resources.
    pub format: RecordFormat,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            items: "items.txt".to_string(),
            creatures: "creatures.txt".to_string(),
            locations: "locations.txt".to_string(),
            achievements: "achievements.json".to_string(),
            license: "license.json".to_string(),
            tutorial: "tutorial.json".to_string(),
            format: RecordFormat::default(),
        }
    }
}

impl ContentConfig {
    /// Builder method to set the item resource.
    #[must_use]
    pub fn with_items(mut self, name: impl Into<String>) -> Self {
        self.items = name.into();
        self
    }

    /// Builder method to set the creature resource.
    #[must_use]
    pub fn with_creatures(mut self, name: impl Into<String>) -> Self {
        self.creatures = name.into();
        self
    }

    /// Builder method to set the location resource.
    #[must_use]
    pub fn with_locations(mut self, name: impl Into<String>) -> Self {
        self.locations = name.into();
        self
    }

    /// Builder method to set the achievement resource.
    #[must_use]
    pub fn with_achievements(mut self, name: impl Into<String>) -> Self {
        self.achievements = name.into();
        self
    }

    /// Builder method to set the license resource.
    #[must_use]
    pub fn with_license(mut self, name: impl Into<String>) -> Self {
        self.license = name.into();
        self
    }

    /// Builder method to set the tutorial resource.
    #[must_use]
    pub fn with_tutorial(mut self, name: impl Into<String>) -> Self {
        self.tutorial = name.into();
        self
    }

    /// Builder method to set the record format.
    #[must_use]
    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }
}
