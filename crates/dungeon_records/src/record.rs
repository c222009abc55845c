//! A single parsed block and its field decoders.

use dungeon_foundation::{Error, ErrorContext, Result, Scalar, Token};

use crate::decode::{Color, Luminosity, Visibility};
use crate::format::Delimiters;

/// Field holding the record id.
pub const ID_FIELD: &str = "ID";
/// Field holding a display colour as `r/g/b`.
pub const COLOR_FIELD: &str = "COLOR";
/// Field holding a [`Visibility`] token.
pub const VISIBILITY_FIELD: &str = "VISIBILITY";
/// Field holding a [`Luminosity`] token.
pub const LUMINOSITY_FIELD: &str = "LUMINOSITY";

/// One block of a record resource: an ordered mapping from field name to
/// raw value.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Resource the record was read from.
    resource: String,
    /// Line the record starts on (1-indexed).
    line: usize,
    /// Fields in file order.
    fields: Vec<(String, String)>,
    delimiters: Delimiters,
}

impl Record {
    pub(crate) fn new(resource: &str, line: usize, delimiters: Delimiters) -> Self {
        Self {
            resource: resource.to_string(),
            line,
            fields: Vec::new(),
            delimiters,
        }
    }

    /// Builds a record from `(key, value)` pairs using the default delimiters.
    ///
    /// Mostly useful in tests; content is normally read through
    /// [`crate::RecordReader`].
    #[must_use]
    pub fn from_fields<K, V>(resource: &str, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new(resource, 1, Delimiters::default());
        record.fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        record
    }

    pub(crate) fn push(&mut self, key: String, value: String) -> std::result::Result<(), String> {
        if self.has_value(&key) {
            return Err(key);
        }
        self.fields.push((key, value));
        Ok(())
    }

    pub(crate) fn append_to_last(&mut self, text: &str) {
        if let Some((_, value)) = self.fields.last_mut() {
            value.push('\n');
            value.push_str(text);
        }
    }

    /// Returns the resource this record came from.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the line this record starts on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over fields in file order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if the record has a field named `key`.
    #[must_use]
    pub fn has_value(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    fn raw(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Context identifying this record in error messages.
    #[must_use]
    pub fn context(&self) -> ErrorContext {
        let context = ErrorContext::new().with_resource(self.resource.clone());
        match self.raw(ID_FIELD) {
            Some(id) => context.with_record(id),
            None => context.with_record(format!("at line {}", self.line)),
        }
    }

    /// Context identifying one field of this record.
    #[must_use]
    pub fn field_context(&self, key: &str) -> ErrorContext {
        self.context().with_field(key)
    }

    /// Returns the value of `key`.
    ///
    /// # Errors
    ///
    /// Returns a missing field error if the record has no such field.
    pub fn get_value(&self, key: &str) -> Result<&str> {
        self.raw(key)
            .ok_or_else(|| Error::missing_field(key).with_context(self.context()))
    }

    /// Returns the record id.
    ///
    /// # Errors
    ///
    /// Returns a missing field error if the record has no `ID` field.
    pub fn id(&self) -> Result<&str> {
        self.get_value(ID_FIELD)
    }

    /// Returns the entries of a multi-value field, or nothing if absent.
    #[must_use]
    pub fn get_array_of_values(&self, key: &str) -> Vec<&str> {
        self.raw(key)
            .map(|raw| split_trimmed(raw, self.delimiters.array))
            .unwrap_or_default()
    }

    /// Splits one entry of a multi-value field into its parts.
    #[must_use]
    pub fn to_list<'v>(&self, entry: &'v str) -> Vec<&'v str> {
        split_trimmed(entry, self.delimiters.list)
    }

    /// Returns each entry of a multi-value field split into its parts.
    #[must_use]
    pub fn get_lists(&self, key: &str) -> Vec<Vec<&str>> {
        self.get_array_of_values(key)
            .into_iter()
            .map(|entry| self.to_list(entry))
            .collect()
    }

    /// Reads an integer field. Absent fields read as zero.
    #[must_use]
    pub fn read_int(&self, key: &str) -> Scalar<i32> {
        self.raw(key).map_or(Scalar::Parsed(0), Scalar::parse)
    }

    /// Reads a floating point field. Absent fields read as zero.
    #[must_use]
    pub fn read_double(&self, key: &str) -> Scalar<f64> {
        self.raw(key).map_or(Scalar::Parsed(0.0), Scalar::parse)
    }

    /// Reads a single map-symbol character.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is missing or is not exactly one
    /// character long.
    pub fn read_character(&self, key: &str) -> Result<char> {
        let raw = self.get_value(key)?;
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::parse(
                format!("{key} must be a single character, found '{raw}'"),
                &self.resource,
                self.line,
            )
            .with_context(self.field_context(key))),
        }
    }

    /// Reads the `COLOR` field, written as `r/g/b`.
    ///
    /// Unparseable channels degrade to zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is missing or does not have three parts.
    pub fn read_color(&self) -> Result<Color> {
        let raw = self.get_value(COLOR_FIELD)?;
        let parts = self.to_list(raw);
        let [r, g, b] = parts.as_slice() else {
            return Err(Error::parse(
                format!("COLOR must have three channels, found '{raw}'"),
                &self.resource,
                self.line,
            )
            .with_context(self.field_context(COLOR_FIELD)));
        };
        let channel = |text: &str| {
            let outcome = Scalar::<u8>::parse(text);
            if outcome.is_defaulted() {
                tracing::warn!(
                    resource = %self.resource,
                    line = self.line,
                    channel = text,
                    "could not parse colour channel; using 0",
                );
            }
            outcome.value()
        };
        Ok(Color::new(channel(*r), channel(*g), channel(*b)))
    }

    /// Reads the `VISIBILITY` field, defaulting to [`Visibility::Visible`].
    ///
    /// # Errors
    ///
    /// Returns an error if the token names no visibility.
    pub fn read_visibility(&self) -> Result<Visibility> {
        match self.raw(VISIBILITY_FIELD) {
            Some(token) => Visibility::from_token(token)
                .map_err(|e| Error::from(e).with_context(self.field_context(VISIBILITY_FIELD))),
            None => Ok(Visibility::default()),
        }
    }

    /// Reads the optional `LUMINOSITY` field.
    ///
    /// # Errors
    ///
    /// Returns an error if the token names no luminosity.
    pub fn read_luminosity(&self) -> Result<Option<Luminosity>> {
        self.raw(LUMINOSITY_FIELD)
            .map(|token| {
                Luminosity::from_token(token)
                    .map_err(|e| Error::from(e).with_context(self.field_context(LUMINOSITY_FIELD)))
            })
            .transpose()
    }
}

fn split_trimmed(raw: &str, delimiter: char) -> Vec<&str> {
    raw.split(delimiter)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}
