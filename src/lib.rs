//! Dungeon - content core of a text adventure
//!
//! This crate re-exports all layers of the Dungeon system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: dungeon_runtime    - Session, spellcasting, REPL and CLI
//! Layer 3: dungeon_content    - Content registries, requirement trees, loader
//!          dungeon_parser     - Tokenizer, splitting, fuzzy matching
//! Layer 2: dungeon_stats      - Battle and exploration statistics
//! Layer 1: dungeon_records    - Structured record reader
//! Layer 0: dungeon_foundation - Core types (Id, Name, Error, BoundedHistory)
//! ```

pub use dungeon_content as content;
pub use dungeon_foundation as foundation;
pub use dungeon_parser as parser;
pub use dungeon_records as records;
pub use dungeon_runtime as runtime;
pub use dungeon_stats as stats;
