//! Block-by-block reading of record resources.
//!
//! The reader owns its underlying source until it is released. That happens
//! on exhaustion, on the first read error, or when the reader is closed or
//! dropped.

use std::io::{BufRead, Lines};

use dungeon_foundation::{Error, Result};

use crate::format::RecordFormat;
use crate::record::Record;
use crate::source::{RecordSource, io_error};

/// Reads [`Record`]s from one resource.
pub struct RecordReader<'s> {
    /// Resource name, for diagnostics.
    name: String,
    format: RecordFormat,
    /// Remaining lines; `None` once the source has been released.
    lines: Option<Lines<Box<dyn BufRead + 's>>>,
    /// Number of the last line read (1-indexed).
    line_number: usize,
    /// Record made current by [`RecordReader::read_next_element`].
    current: Option<Record>,
    records_read: usize,
}

impl<'s> RecordReader<'s> {
    /// Opens `name` from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot open the resource.
    pub fn open<S>(source: &'s S, name: &str, format: RecordFormat) -> Result<Self>
    where
        S: RecordSource + ?Sized,
    {
        let reader = source.open(name)?;
        tracing::debug!(resource = name, "opened record resource");
        Ok(Self {
            name: name.to_string(),
            format,
            lines: Some(reader.lines()),
            line_number: 0,
            current: None,
            records_read: 0,
        })
    }

    /// Returns the resource name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of records read so far.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Advances to the next record.
    ///
    /// Returns `false` once the resource is exhausted; the reader should then
    /// be closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be read or a line is malformed.
    pub fn read_next_element(&mut self) -> Result<bool> {
        self.current = self.next_record()?;
        Ok(self.current.is_some())
    }

    /// Returns the record made current by the last
    /// [`RecordReader::read_next_element`] call.
    #[must_use]
    pub fn current(&self) -> Option<&Record> {
        self.current.as_ref()
    }

    /// Reads the next record, or `None` once the resource is exhausted.
    ///
    /// The underlying source is released as soon as it is exhausted or a
    /// read fails; later calls return `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be read, a non-blank line has
    /// no key separator, or a field repeats within one record.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        let result = self.read_block();
        if result.is_err() && self.lines.take().is_some() {
            tracing::debug!(resource = %self.name, line = self.line_number, "released record resource after an error");
        }
        result
    }

    fn read_block(&mut self) -> Result<Option<Record>> {
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };

        let mut record: Option<Record> = None;
        let mut continuing = false;
        let mut exhausted = false;

        loop {
            let Some(line) = lines.next() else {
                exhausted = true;
                break;
            };
            let line = line.map_err(|e| io_error(&self.name, e))?;
            self.line_number += 1;
            let trimmed = line.trim();

            if continuing {
                let (text, more) = strip_continuation(trimmed, self.format.continuation);
                if let Some(record) = record.as_mut() {
                    record.append_to_last(text);
                }
                continuing = more;
                continue;
            }

            if trimmed.is_empty() || trimmed.starts_with(self.format.comment_prefix.as_str()) {
                continue;
            }

            if trimmed == self.format.boundary {
                if record.is_some() {
                    break;
                }
                continue;
            }

            let Some((key, value)) = trimmed.split_once(self.format.key_separator) else {
                return Err(Error::parse(
                    format!("expected KEY{} value", self.format.key_separator),
                    &self.name,
                    self.line_number,
                ));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(Error::parse("empty field name", &self.name, self.line_number));
            }

            let (value, more) = strip_continuation(value.trim(), self.format.continuation);
            let line_number = self.line_number;
            let delimiters = self.format.delimiters();
            let current =
                record.get_or_insert_with(|| Record::new(&self.name, line_number, delimiters));
            current
                .push(key.to_string(), value.to_string())
                .map_err(|key| {
                    Error::parse(format!("duplicate field {key}"), &self.name, line_number)
                })?;
            continuing = more;
        }

        if exhausted {
            self.lines = None;
            tracing::debug!(resource = %self.name, records = self.records_read, "record resource exhausted");
        }
        if record.is_some() {
            self.records_read += 1;
        }
        Ok(record)
    }

    /// Closes the reader, releasing the underlying source.
    pub fn close(mut self) {
        if self.lines.take().is_some() {
            tracing::debug!(resource = %self.name, "closed record resource before exhaustion");
        }
    }
}

impl Drop for RecordReader<'_> {
    fn drop(&mut self) {
        if self.lines.is_some() {
            tracing::trace!(resource = %self.name, line = self.line_number, "released record resource");
        }
    }
}

/// Splits a trailing continuation character off `text`.
fn strip_continuation(text: &str, continuation: char) -> (&str, bool) {
    match text.strip_suffix(continuation) {
        Some(rest) => (rest.trim_end(), true),
        None => (text, false),
    }
}
