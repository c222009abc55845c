//! Error types for the Dungeon content core.
//!
//! Every [`Error`] is fatal: it describes content that is structurally
//! inconsistent, a resource that cannot be read, or a loader used out of
//! order. Recoverable scalar defects never become an [`Error`]; they are
//! reported through [`crate::Scalar`] instead.

use std::fmt;

use thiserror::Error;

use crate::id::Id;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for content loading.
#[derive(Debug, Error)]
#[error("{kind}{}", .context.as_ref().map(|c| format!(" ({c})")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about which resource and record was being loaded.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error, keeping any context already attached.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an invalid tag error wrapping the failed lookup.
    #[must_use]
    pub fn invalid_tag(source: UnknownToken) -> Self {
        Self::new(ErrorKind::InvalidTag {
            tag: source.token.clone(),
            source,
        })
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingField(field.into()))
    }

    /// Creates a parse error for a line of a resource.
    #[must_use]
    pub fn parse(message: impl Into<String>, resource: impl Into<String>, line: usize) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            resource: resource.into(),
            line,
        })
    }

    /// Creates a duplicate id error.
    #[must_use]
    pub fn duplicate_id(registry: &'static str, id: Id) -> Self {
        Self::new(ErrorKind::DuplicateId { registry, id })
    }

    /// Creates a duplicate build error.
    #[must_use]
    pub fn duplicate_build(what: &'static str) -> Self {
        Self::new(ErrorKind::DuplicateBuild(what))
    }

    /// Creates a dangling reference error.
    #[must_use]
    pub fn dangling_reference(field: &'static str, target: Id) -> Self {
        Self::new(ErrorKind::DanglingReference { field, target })
    }

    /// Returns true if this error was caused by an unrecognized tag.
    #[must_use]
    pub fn is_invalid_tag(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidTag { .. })
    }
}

impl From<UnknownToken> for Error {
    fn from(source: UnknownToken) -> Self {
        Self::new(ErrorKind::UnknownToken(source))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A constructor received an argument it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A record named a tag outside the closed tag enumeration.
    #[error("invalid tag '{tag}' found")]
    InvalidTag {
        /// The offending tag string.
        tag: String,
        /// The failed lookup.
        #[source]
        source: UnknownToken,
    },

    /// A record named a value outside some closed enumeration.
    #[error(transparent)]
    UnknownToken(UnknownToken),

    /// A required field was absent from a record.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A resource line could not be parsed.
    #[error("parse error in {resource} at line {line}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// The resource being read.
        resource: String,
        /// Line number (1-indexed).
        line: usize,
    },

    /// A required resource does not exist.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    /// A resource exists but could not be read.
    #[error("failed to read {resource}: {source}")]
    Io {
        /// The resource being read.
        resource: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A tree-structured resource did not match its schema.
    #[error("malformed {resource}: {message}")]
    Json {
        /// The resource being decoded.
        resource: String,
        /// Decoder message, including the offending field.
        message: String,
    },

    /// Two entries of one registry share an id.
    #[error("duplicate id {id} in {registry} registry")]
    DuplicateId {
        /// The registry being built.
        registry: &'static str,
        /// The repeated id.
        id: Id,
    },

    /// A build-once structure was built a second time.
    #[error("{0} was already built")]
    DuplicateBuild(&'static str),

    /// A record refers to an id that no loaded registry contains.
    #[error("{field} refers to unknown id {target}")]
    DanglingReference {
        /// The field holding the reference.
        field: &'static str,
        /// The id that could not be resolved.
        target: Id,
    },

    /// A period expression could not be parsed.
    #[error("invalid period: {0}")]
    InvalidPeriod(String),

    /// The interactive terminal failed.
    #[error("terminal error: {0}")]
    Terminal(String),
}

/// A string that names no variant of a closed enumeration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {kind} '{token}'")]
pub struct UnknownToken {
    /// The enumeration that was searched.
    pub kind: &'static str,
    /// The token that matched no variant.
    pub token: String,
}

/// Where in the content an error occurred.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Resource name, e.g. `items.txt`.
    pub resource: Option<String>,
    /// Id of the record being built.
    pub record: Option<String>,
    /// Field being read.
    pub field: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resource.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Sets the record id.
    #[must_use]
    pub fn with_record(mut self, record: impl Into<String>) -> Self {
        self.record = Some(record.into());
        self
    }

    /// Sets the field.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(resource) = &self.resource {
            write!(f, "in {resource}")?;
            sep = ", ";
        }
        if let Some(record) = &self.record {
            write!(f, "{sep}record {record}")?;
            sep = ", ";
        }
        if let Some(field) = &self.field {
            write!(f, "{sep}field {field}")?;
        }
        Ok(())
    }
}
