//! Resource sources.
//!
//! The content core never decides where bytes come from. A [`RecordSource`]
//! opens a named resource; [`DirectorySource`] reads files under a root
//! directory and [`MemorySource`] serves resources held in memory, such as
//! text embedded in the binary.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use dungeon_foundation::{Error, ErrorKind, Result};

/// Opens named resources for reading.
pub trait RecordSource {
    /// Opens the resource called `name`.
    ///
    /// # Errors
    ///
    /// Returns a resource-not-found error if no such resource exists, or an
    /// I/O error if it exists but cannot be opened.
    fn open(&self, name: &str) -> Result<Box<dyn BufRead + '_>>;

    /// Reads the whole resource called `name` into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be opened or is not UTF-8.
    fn read_to_string(&self, name: &str) -> Result<String> {
        let mut reader = self.open(name)?;
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| io_error(name, source))?;
        Ok(text)
    }
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn open(&self, name: &str) -> Result<Box<dyn BufRead + '_>> {
        (**self).open(name)
    }
}

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn open(&self, name: &str) -> Result<Box<dyn BufRead + '_>> {
        (**self).open(name)
    }
}

pub(crate) fn io_error(resource: &str, source: io::Error) -> Error {
    Error::new(ErrorKind::Io {
        resource: resource.to_string(),
        source,
    })
}

/// Reads resources from files under a root directory.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RecordSource for DirectorySource {
    fn open(&self, name: &str) -> Result<Box<dyn BufRead + '_>> {
        let path = self.root.join(name);
        match File::open(&path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::new(
                ErrorKind::ResourceNotFound(path.display().to_string()),
            )),
            Err(e) => Err(io_error(name, e)),
        }
    }
}

/// Serves resources held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    resources: HashMap<String, String>,
}

impl MemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a resource.
    #[must_use]
    pub fn with_resource(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(name, contents);
        self
    }

    /// Adds or replaces a resource.
    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.resources.insert(name.into(), contents.into());
    }
}

impl RecordSource for MemorySource {
    fn open(&self, name: &str) -> Result<Box<dyn BufRead + '_>> {
        self.resources
            .get(name)
            .map(|contents| Box::new(Cursor::new(contents.as_bytes())) as Box<dyn BufRead + '_>)
            .ok_or_else(|| Error::new(ErrorKind::ResourceNotFound(name.to_string())))
    }
}
