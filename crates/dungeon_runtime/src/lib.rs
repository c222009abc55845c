//! Session, spellcasting, REPL and CLI for Dungeon.
//!
//! ```text
//! ContentLoader ──► GameData ──► Session ◄── Repl ◄── LineEditor
//!                                  │
//!                    SpellBook, Statistics, AchievementTracker,
//!                    BoundedHistory of commands
//! ```
//!
//! # Modules
//!
//! - [`config`] - Session settings
//! - [`editor`] - Line editor abstraction and its rustyline implementation
//! - [`repl`] - The interactive command loop
//! - [`session`] - Live player state over frozen game data
//! - [`spellcaster`] - Learned spells and `cast` parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod repl;
pub mod session;
pub mod spellcaster;

#[cfg(test)]
mod testing;

pub use config::SessionConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Repl, Reply};
pub use session::Session;
pub use spellcaster::{CastOutcome, SpellBook};
