//! Integration tests for Layer 3: Content
//!
//! Tests for the content loader, registries and achievements.

mod achievements;
mod loader;
mod names;

use dungeon_content::{ContentConfig, ContentLoader, GameData};
use dungeon_records::DirectorySource;

/// Loads the content shipped in the repository.
pub fn shipped_content() -> GameData {
    let source = DirectorySource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/content"));
    ContentLoader::new(source, ContentConfig::default())
        .load_all()
        .unwrap()
}
