//! Field helpers shared by the record-backed registries.

use dungeon_foundation::{Error, Name, Result, Scalar, Token};
use dungeon_records::Record;

/// Builds a [`Name`] from the entries of a `NAME` field.
///
/// One entry is used for both forms; two or more give the singular and the
/// plural. An empty array yields the sentinel name and a warning.
#[must_use]
pub fn name_from_array(strings: &[&str]) -> Name {
    match strings {
        [] => {
            tracing::warn!("empty array used to create a name; using the sentinel");
            Name::sentinel()
        }
        [singular] => Name::new(*singular),
        [singular, plural, ..] => Name::with_plural(*singular, *plural),
    }
}

/// Reads the `NAME` field of `record`.
pub(crate) fn read_name(record: &Record) -> Name {
    let strings = record.get_array_of_values("NAME");
    if strings.is_empty() {
        tracing::warn!(record = %record.context(), "record has no name; using the sentinel");
        return Name::sentinel();
    }
    name_from_array(&strings)
}

/// Parses every entry of a multi-value field as a tag.
///
/// # Errors
///
/// Returns an invalid tag error for the first entry that names no tag.
pub fn tags_from_array<T: Token>(strings: &[&str]) -> Result<Vec<T>> {
    let mut tags = Vec::with_capacity(strings.len());
    for raw in strings {
        let tag = T::from_token(raw).map_err(Error::invalid_tag)?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

/// Reads the `TAGS` field of `record`.
pub(crate) fn read_tags<T: Token>(record: &Record) -> Result<Vec<T>> {
    tags_from_array(&record.get_array_of_values("TAGS"))
        .map_err(|e| e.with_context(record.field_context("TAGS")))
}

/// Reads an integer field, warning and using zero if it does not parse.
pub(crate) fn int_field(record: &Record, key: &str) -> i32 {
    warn_if_defaulted(record, key, record.read_int(key))
}

/// Reads a floating point field, warning and using zero if it does not parse.
pub(crate) fn double_field(record: &Record, key: &str) -> f64 {
    warn_if_defaulted(record, key, record.read_double(key))
}

/// Parses one part of a list entry, warning and using the default if it
/// does not parse.
pub(crate) fn list_part<T>(record: &Record, key: &str, raw: &str) -> T
where
    T: std::str::FromStr + Default,
{
    warn_if_defaulted(record, key, Scalar::parse(raw))
}

fn warn_if_defaulted<T>(record: &Record, key: &str, outcome: Scalar<T>) -> T {
    if let Scalar::Defaulted { raw, .. } = &outcome {
        tracing::warn!(
            record = %record.context(),
            field = key,
            value = %raw,
            "could not parse the value; using the default",
        );
    }
    outcome.value()
}
