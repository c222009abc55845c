//! Field decoder tests.
//!
//! Tests for arrays, lists, scalars and token fields.

use dungeon_foundation::{ErrorKind, Scalar};
use dungeon_records::{Color, Luminosity, Record, Visibility};

fn record(fields: &[(&str, &str)]) -> Record {
    Record::from_fields("test.txt", fields.iter().copied())
}

#[test]
fn malformed_number_defaults() {
    let record = record(&[("WEIGHT", "abc"), ("DAMAGE", "7")]);
    let weight = record.read_double("WEIGHT");
    assert!(weight.is_defaulted());
    assert_eq!(
        weight,
        Scalar::Defaulted {
            value: 0.0,
            raw: "abc".to_string()
        }
    );
    assert_eq!(record.read_int("DAMAGE"), Scalar::Parsed(7));
}

#[test]
fn absent_number_reads_as_zero() {
    let record = record(&[("ID", "A")]);
    assert_eq!(record.read_int("HEALTH").value(), 0);
    assert!(!record.read_int("HEALTH").is_defaulted());
}

#[test]
fn arrays_and_lists() {
    let record = record(&[("SPAWNERS", "RAT/4/20 | GOBLIN/2/60"), ("NAME", "Rat|Rats")]);
    assert_eq!(record.get_array_of_values("NAME"), vec!["Rat", "Rats"]);
    assert_eq!(
        record.get_lists("SPAWNERS"),
        vec![vec!["RAT", "4", "20"], vec!["GOBLIN", "2", "60"]]
    );
    assert!(record.get_lists("ITEMS").is_empty());
}

#[test]
fn missing_required_field() {
    let record = record(&[("TYPE", "Food")]);
    let err = record.id().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingField(ref field) if field == "ID"));
}

#[test]
fn color_channels() {
    let parsed = record(&[("COLOR", "34/139/34")]).read_color().unwrap();
    assert_eq!(parsed, Color::new(34, 139, 34));

    let degraded = record(&[("COLOR", "300/x/1")]).read_color().unwrap();
    assert_eq!(degraded, Color::new(0, 0, 1));

    let err = record(&[("COLOR", "1/2")]).read_color().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { .. }));
}

#[test]
fn single_character() {
    assert_eq!(record(&[("SYMBOL", "~")]).read_character("SYMBOL").unwrap(), '~');
    assert!(record(&[("SYMBOL", "ab")]).read_character("SYMBOL").is_err());
}

#[test]
fn visibility_defaults_to_visible() {
    assert_eq!(record(&[]).read_visibility().unwrap(), Visibility::Visible);
    assert_eq!(
        record(&[("VISIBILITY", "FAINT")]).read_visibility().unwrap(),
        Visibility::Faint
    );
    let err = record(&[("VISIBILITY", "SHINY")]).read_visibility().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownToken(_)));
}

#[test]
fn luminosity_is_optional() {
    assert_eq!(record(&[]).read_luminosity().unwrap(), None);
    assert_eq!(
        record(&[("LUMINOSITY", "BRIGHT")]).read_luminosity().unwrap(),
        Some(Luminosity::Bright)
    );
}
