//! Recoverable scalar reads.
//!
//! Content files may carry malformed numbers. Those defects are tolerated:
//! the value degrades to a default and loading continues. [`Scalar`] keeps
//! that path apart from the fatal [`crate::Error`] path.

use std::str::FromStr;

/// Outcome of reading a scalar value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar<T> {
    /// The raw text parsed (or the field was absent and the default applies).
    Parsed(T),
    /// The raw text could not be parsed; `value` is the substituted default.
    Defaulted {
        /// The default that was substituted.
        value: T,
        /// The text that failed to parse.
        raw: String,
    },
}

impl<T> Scalar<T> {
    /// Returns the value, parsed or defaulted.
    pub fn value(self) -> T {
        match self {
            Self::Parsed(value) | Self::Defaulted { value, .. } => value,
        }
    }

    /// Returns true if a default was substituted.
    #[must_use]
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }
}

impl<T: FromStr + Default> Scalar<T> {
    /// Parses `raw`, substituting `T::default()` on failure.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse() {
            Ok(value) => Self::Parsed(value),
            Err(_) => Self::Defaulted {
                value: T::default(),
                raw: raw.to_string(),
            },
        }
    }
}
