//! Name tests.
//!
//! Tests for building names from `NAME` arrays and tags from `TAGS` arrays.

use dungeon_content::{ItemTag, name_from_array, tags_from_array};
use dungeon_foundation::Name;

#[test]
fn empty_array_gives_the_sentinel() {
    let name = name_from_array(&[]);
    assert_eq!(name, Name::sentinel());
    assert_eq!(name.singular(), "ERROR");
}

#[test]
fn one_entry_is_both_forms() {
    let name = name_from_array(&["Milk"]);
    assert_eq!(name.singular(), "Milk");
    assert_eq!(name.plural(), "Milk");
}

#[test]
fn two_entries_are_singular_and_plural() {
    let name = name_from_array(&["Apple", "Apples"]);
    assert_eq!(name.singular(), "Apple");
    assert_eq!(name.plural(), "Apples");
    assert_eq!(name.quantified(3), "3 Apples");
}

#[test]
fn tags_equal_the_listed_set() {
    let tags: Vec<ItemTag> = tags_from_array(&["FOOD", "DECOMPOSES", "FOOD"]).unwrap();
    assert_eq!(tags, vec![ItemTag::Food, ItemTag::Decomposes]);
}

#[test]
fn unknown_tag_is_an_error() {
    let err = tags_from_array::<ItemTag>(&["FOOD", "SPICY"]).unwrap_err();
    assert!(err.is_invalid_tag());
}
