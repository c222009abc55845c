//! Structured record reading for Dungeon content.
//!
//! Content files are sequences of blocks of `KEY: value` lines:
//!
//! ```text
//! // comments are skipped
//! ID: STICK
//! NAME: Stick | Sticks
//! TAGS: WEAPON
//! WEIGHT: 0.5
//! END
//! ```
//!
//! # Modules
//!
//! - [`format`] - Pluggable delimiters ([`RecordFormat`])
//! - [`source`] - Where resources come from ([`RecordSource`])
//! - [`reader`] - Block-by-block reading ([`RecordReader`])
//! - [`record`] - One parsed block and its field decoders ([`Record`])
//! - [`decode`] - Small value types the decoders produce

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decode;
pub mod format;
pub mod reader;
pub mod record;
pub mod source;

pub use decode::{Color, Luminosity, Visibility};
pub use format::RecordFormat;
pub use reader::RecordReader;
pub use record::Record;
pub use source::{DirectorySource, MemorySource, RecordSource};
