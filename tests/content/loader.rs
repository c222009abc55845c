//! Loader tests.
//!
//! Tests for loading order, cross references and fatal content errors.

use std::time::Duration;

use dungeon_content::{
    ContentConfig, ContentLoader, CreatureTag, Direction, ItemTag, LocationKind,
};
use dungeon_foundation::{ErrorKind, Id};
use dungeon_records::{Luminosity, MemorySource, Visibility};

use crate::shipped_content;

fn minimal() -> MemorySource {
    MemorySource::new()
        .with_resource("items.txt", "ID: STICK\nTYPE: Weapon\nNAME: Stick\nTAGS: WEAPON\nEND\n")
        .with_resource("creatures.txt", "ID: RAT\nTYPE: Beast\nNAME: Rat\nEND\n")
        .with_resource(
            "locations.txt",
            "ID: FIELD\nTYPE: LAND\nNAME: Field\nSYMBOL: .\nCOLOR: 0/255/0\nEND\n",
        )
        .with_resource("achievements.json", r#"{"achievements": []}"#)
        .with_resource("license.json", r#"{"license": "MIT"}"#)
        .with_resource("tutorial.json", r#"{"tutorial": "Walk."}"#)
}

#[test]
fn shipped_content_loads() {
    let data = shipped_content();
    assert_eq!(data.item_blueprints().len(), 8);
    assert_eq!(data.creature_presets().len(), 4);
    assert_eq!(data.skill_definitions().len(), 3);
    assert_eq!(data.location_presets().len(), 5);
    assert_eq!(data.achievements().len(), 7);
    assert!(data.license().contains("public domain"));
    assert!(data.tutorial().starts_with("Type help"));
}

#[test]
fn shipped_items() {
    let data = shipped_content();
    let items = data.item_blueprints();

    let apple = items.get("APPLE").unwrap();
    assert_eq!(apple.tags(), &[ItemTag::Food, ItemTag::Decomposes]);
    assert_eq!(apple.nutrition(), Some(20));
    assert_eq!(apple.decomposition_period(), Some(Duration::from_secs(36 * 3600)));

    let tome = items.get("TOME_OF_FIRE").unwrap();
    assert_eq!(tome.skill(), Some(&Id::new("FIREBALL")));
    assert_eq!(
        tome.text(),
        Some("The words on the cover glow faintly. Reading them aloud\nleaves your fingertips warm.")
    );

    let torch = items.get("TORCH").unwrap();
    assert_eq!(torch.luminosity(), Some(Luminosity::Bright));
    assert_eq!(torch.visibility(), Visibility::Visible);
    assert_eq!(items.get("WATCH").unwrap().visibility(), Visibility::Faint);
    assert_eq!(items.get("STICK").unwrap().nutrition(), None);
}

#[test]
fn shipped_creatures_and_locations() {
    let data = shipped_content();
    let goblin = data.creature_presets().get("GOBLIN").unwrap();
    assert!(goblin.has_tag(CreatureTag::Aggressive));
    assert_eq!(goblin.weapon(), Some(&Id::new("STICK")));
    assert_eq!(goblin.items(), &[Id::new("APPLE"), Id::new("APPLE")]);

    let crypt = data.location_presets().get("CRYPT").unwrap();
    assert_eq!(crypt.kind(), LocationKind::Land);
    assert_eq!(crypt.spawners().len(), 2);
    assert_eq!(crypt.spawners()[0].population, 2);
    assert_eq!(crypt.spawners()[0].delay, 120);
    assert!(crypt.is_blocked(Direction::North));
    assert!(!crypt.is_blocked(Direction::South));

    let bridge = data.location_presets().get("BRIDGE").unwrap();
    assert_eq!(bridge.kind(), LocationKind::Bridge);
    assert_eq!(bridge.blocked_entrances(), &[Direction::East, Direction::West]);
}

#[test]
fn load_twice_is_a_duplicate_build() {
    let mut loader = ContentLoader::new(minimal(), ContentConfig::default());
    loader.load_all().unwrap();
    let err = loader.load_all().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateBuild(_)));
}

#[test]
fn invalid_tag_aborts_loading() {
    let mut source = minimal();
    source.insert(
        "items.txt",
        "ID: STICK\nTYPE: Weapon\nNAME: Stick\nTAGS: WEAPON | SHARP\nEND\n",
    );
    let err = ContentLoader::new(source, ContentConfig::default())
        .load_all()
        .unwrap_err();
    assert!(err.is_invalid_tag());
    let context = err.context.unwrap();
    assert_eq!(context.record.as_deref(), Some("STICK"));
    assert_eq!(context.field.as_deref(), Some("TAGS"));
}

#[test]
fn unknown_creature_item_aborts_loading() {
    let mut source = minimal();
    source.insert(
        "creatures.txt",
        "ID: RAT\nTYPE: Beast\nNAME: Rat\nITEMS: STICK | CHEESE\nEND\n",
    );
    let err = ContentLoader::new(source, ContentConfig::default())
        .load_all()
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::DanglingReference { field: "ITEMS", ref target } if target.as_str() == "CHEESE"
    ));
}

#[test]
fn unknown_spawner_aborts_loading() {
    let mut source = minimal();
    source.insert(
        "locations.txt",
        "ID: FIELD\nTYPE: LAND\nSYMBOL: .\nCOLOR: 0/255/0\nSPAWNERS: DRAGON/1/1\nEND\n",
    );
    let err = ContentLoader::new(source, ContentConfig::default())
        .load_all()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DanglingReference { field: "SPAWNERS", .. }));
}

#[test]
fn malformed_weight_defaults() {
    let mut source = minimal();
    source.insert(
        "items.txt",
        "ID: STICK\nTYPE: Weapon\nNAME: Stick\nWEIGHT: abc\nDAMAGE: 3\nEND\n",
    );
    let data = ContentLoader::new(source, ContentConfig::default())
        .load_all()
        .unwrap();
    let stick = data.item_blueprints().get("STICK").unwrap();
    assert!(stick.weight().abs() < f64::EPSILON);
    assert_eq!(stick.damage(), 3);
}

#[test]
fn malformed_period_is_fatal() {
    let mut source = minimal();
    source.insert(
        "items.txt",
        "ID: STICK\nTYPE: Weapon\nDECOMPOSITION_PERIOD: soon\nEND\n",
    );
    let err = ContentLoader::new(source, ContentConfig::default())
        .load_all()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPeriod(_)));
}

#[test]
fn malformed_achievements_are_fatal() {
    let mut source = minimal();
    source.insert(
        "achievements.json",
        r#"{"achievements": [{"id": "A", "name": "A", "info": "", "text": "", "weapon": "AXE"}]}"#,
    );
    let err = ContentLoader::new(source, ContentConfig::default())
        .load_all()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Json { .. }));
}

#[test]
fn resource_names_are_configurable() {
    let source = MemorySource::new()
        .with_resource("objects.txt", "ID: STICK\nTYPE: Weapon\nEND\n")
        .with_resource("monsters.txt", "")
        .with_resource("map.txt", "")
        .with_resource("goals.json", r#"{"achievements": []}"#)
        .with_resource("license.json", r#"{"license": "MIT"}"#)
        .with_resource("tutorial.json", r#"{"tutorial": "Walk."}"#);
    let config = ContentConfig::default()
        .with_items("objects.txt")
        .with_creatures("monsters.txt")
        .with_locations("map.txt")
        .with_achievements("goals.json");
    let data = ContentLoader::new(source, config).load_all().unwrap();
    assert!(data.item_blueprints().contains("STICK"));
    assert!(data.creature_presets().is_empty());
}
