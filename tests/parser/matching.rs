//! Matching tests.
//!
//! Tests for fuzzy matching against the loaded registries.

use dungeon_content::{ContentConfig, ContentLoader, GameData, builtin_skills};
use dungeon_foundation::Selectable;
use dungeon_parser::{MatchOutcome, find_best_complete_matches};
use dungeon_records::DirectorySource;

fn content() -> GameData {
    let source = DirectorySource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/content"));
    ContentLoader::new(source, ContentConfig::default())
        .load_all()
        .unwrap()
}

fn unique_name(outcome: MatchOutcome<'_, impl Selectable>) -> String {
    match outcome {
        MatchOutcome::Unique(found) => found.name().singular().to_string(),
        MatchOutcome::None => panic!("expected a unique match, found none"),
        MatchOutcome::Ambiguous(found) => panic!("expected a unique match, found {}", found.len()),
    }
}

#[test]
fn spell_prefixes() {
    let skills = builtin_skills();
    assert_eq!(unique_name(find_best_complete_matches(&skills, &["fire"]).classify()), "Fireball");
    assert_eq!(unique_name(find_best_complete_matches(&skills, &["fireb"]).classify()), "Fireball");
    assert_eq!(unique_name(find_best_complete_matches(&skills, &["b", "g"]).classify()), "Burning Ground");
    assert!(find_best_complete_matches(&skills, &["zzz"]).classify().is_none());
}

#[test]
fn item_names() {
    let data = content();
    let items = data.item_blueprints();
    assert_eq!(
        unique_name(find_best_complete_matches(items.values(), &["tome"]).classify()),
        "Tome of Fire"
    );
    assert_eq!(
        unique_name(find_best_complete_matches(items.values(), &["long"]).classify()),
        "Longsword"
    );
    // "of" occurs in both book names.
    assert!(find_best_complete_matches(items.values(), &["of"]).classify().is_ambiguous());
}

#[test]
fn word_share_breaks_ties() {
    let data = content();
    let items = data.item_blueprints();
    assert_eq!(
        unique_name(find_best_complete_matches(items.values(), &["man"]).classify()),
        "Manual of Repair"
    );
    // Both books contain "of"; only one also contains "fire".
    let matches = find_best_complete_matches(items.values(), &["of", "fire"]);
    assert_eq!(matches.len(), 1);
}

#[test]
fn location_and_creature_names() {
    let data = content();
    assert_eq!(
        unique_name(find_best_complete_matches(data.location_presets().values(), &["cr"]).classify()),
        "Crypt"
    );
    assert_eq!(
        unique_name(find_best_complete_matches(data.creature_presets().values(), &["SKEL"]).classify()),
        "Skeleton"
    );
    let empty: [&str; 0] = [];
    assert!(find_best_complete_matches(data.creature_presets().values(), &empty).is_empty());
}
