//! Player input handling for Dungeon.
//!
//! Turns a line of input into something the session can act on:
//!
//! ```text
//! "Cast Fire on the goblin"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["cast", "fire", "on", "the", "goblin"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SPLIT         │  → before ["cast", "fire"], after ["the", "goblin"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ FUZZY MATCHER   │  → Unique(Fireball) / Ambiguous / None
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to lowercase words
//! - [`split`] - Split a token list on a separator word
//! - [`matcher`] - Match tokens against [`dungeon_foundation::Selectable`] names

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod matcher;
pub mod split;
pub mod tokenizer;

pub use matcher::{MatchOutcome, Matches, find_best_complete_matches};
pub use split::Split;
pub use tokenizer::{Command, InputTokenizer};
