//! Record format configuration.

/// Delimiters and markers of the record format.
///
/// Every character and marker is pluggable; [`RecordFormat::default`]
/// describes the format shipped with the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordFormat {
    /// Separates a key from its value (`ID: SWORD`).
    pub key_separator: char,
    /// Separates the entries of a multi-value field (`Apple | Apples`).
    pub array_delimiter: char,
    /// Separates the parts of one entry (`GOBLIN/4/12`).
    pub list_delimiter: char,
    /// A line holding only this marker ends a block.
    pub boundary: String,
    /// Lines starting with this prefix are skipped.
    pub comment_prefix: String,
    /// A value ending with this character continues on the next line.
    pub continuation: char,
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self {
            key_separator: ':',
            array_delimiter: '|',
            list_delimiter: '/',
            boundary: "END".to_string(),
            comment_prefix: "//".to_string(),
            continuation: '\\',
        }
    }
}

impl RecordFormat {
    /// Builder method to set the key separator.
    #[must_use]
    pub fn with_key_separator(mut self, separator: char) -> Self {
        self.key_separator = separator;
        self
    }

    /// Builder method to set the array delimiter.
    #[must_use]
    pub fn with_array_delimiter(mut self, delimiter: char) -> Self {
        self.array_delimiter = delimiter;
        self
    }

    /// Builder method to set the list delimiter.
    #[must_use]
    pub fn with_list_delimiter(mut self, delimiter: char) -> Self {
        self.list_delimiter = delimiter;
        self
    }

    /// Builder method to set the block boundary marker.
    #[must_use]
    pub fn with_boundary(mut self, boundary: impl Into<String>) -> Self {
        self.boundary = boundary.into();
        self
    }

    /// Builder method to set the comment prefix.
    #[must_use]
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Builder method to set the line continuation character.
    #[must_use]
    pub fn with_continuation(mut self, continuation: char) -> Self {
        self.continuation = continuation;
        self
    }

    pub(crate) fn delimiters(&self) -> Delimiters {
        Delimiters {
            array: self.array_delimiter,
            list: self.list_delimiter,
        }
    }
}

/// The delimiters a parsed record needs to split its values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Delimiters {
    pub(crate) array: char,
    pub(crate) list: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        RecordFormat::default().delimiters()
    }
}
